//! HTTP page source for the artworks API.
//!
//! Requests `{base_url}?page={page}&limit={size}` and decodes the response
//! envelope. No retries: a failed request is reported to the caller as is.

use crate::model::{Artwork, FetchError, Page, PageIndex, PageSize};
use crate::parser;
use crate::source::PageSource;
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

/// Blocking HTTP client for one paginated collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Build a source for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| FetchError::Transport {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// URL for one page, preserving any query already on the base URL.
    pub fn page_url(&self, page: PageIndex, size: PageSize) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &size.to_string());
        url
    }
}

impl PageSource for HttpSource {
    type Record = Artwork;

    fn fetch_page(&mut self, page: PageIndex, size: PageSize) -> Result<Page<Artwork>, FetchError> {
        let url = self.page_url(page, size);
        debug!(url = %url, "fetching page");

        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url.clone()).send().map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        parser::parse_api_page(&body, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_appends_page_and_limit() {
        let source = HttpSource::new("https://api.artic.edu/api/v1/artworks").unwrap();
        let url = source.page_url(PageIndex::new(3).unwrap(), PageSize::new(12).unwrap());
        assert_eq!(
            url.as_str(),
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12"
        );
    }

    #[test]
    fn page_url_keeps_existing_query() {
        let source = HttpSource::new("https://example.test/items?fields=id,title").unwrap();
        let url = source.page_url(PageIndex::first(), PageSize::new(5).unwrap());
        assert_eq!(
            url.as_str(),
            "https://example.test/items?fields=id,title&page=1&limit=5"
        );
    }

    #[test]
    fn new_rejects_unparseable_url() {
        let err = HttpSource::new("not a url").unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
