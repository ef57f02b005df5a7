//! Session script input.
//!
//! A script is JSONL: one user event per line. It is read from a file or from
//! piped stdin, whole, before replay starts.

use crate::model::error::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

/// Line reader over a script file or stdin.
pub struct ScriptSource {
    origin: Option<PathBuf>,
    reader: Box<dyn BufRead>,
}

impl std::fmt::Debug for ScriptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptSource")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl ScriptSource {
    /// Open a script file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        Ok(Self {
            origin: Some(path.to_path_buf()),
            reader: Box::new(BufReader::new(file)),
        })
    }

    /// Read the script from piped stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal.
    pub fn stdin() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self {
            origin: None,
            reader: Box::new(BufReader::new(stdin)),
        })
    }

    /// Script over any reader.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            origin: None,
            reader: Box::new(reader),
        }
    }

    /// File the script came from; `None` for stdin and readers.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Read every line, trailing newlines stripped. Blank lines are kept so
    /// line numbers stay aligned with the file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading fails.
    pub fn read_lines(self) -> Result<Vec<String>, InputError> {
        self.reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(InputError::from)
    }
}

/// Pick the script source.
///
/// # Logic:
/// 1. If a path is provided: open that file
/// 2. Else if stdin is piped: read stdin
/// 3. Else: `InputError::NoInput`
pub fn detect_script_source(path: Option<PathBuf>) -> Result<ScriptSource, InputError> {
    match path {
        Some(path) => ScriptSource::open(path),
        None => ScriptSource::stdin(),
    }
}
