//! Persistence of the currently displayed identifier.
//!
//! The slot behaves like a URL fragment: what is written is percent-encoded,
//! what is read back is decoded before the core sees it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::traits_and_structs::collaborators::LocationSlot;

/// The characters `encodeURIComponent` escapes: everything but alphanumerics and `-_.!~*'()`.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("failed to access location file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("location slot is not valid UTF-8 once decoded: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

pub fn encode(identifier: &str) -> String {
    utf8_percent_encode(identifier, COMPONENT).to_string()
}

pub fn decode(text: &str) -> Result<String, LocationError> {
    Ok(percent_decode_str(text).decode_utf8()?.into_owned())
}

/// Keeps the decoded identifier in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryLocation {
    slot: Option<String>,
}

impl MemoryLocation {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            slot: initial.map(str::to_owned),
        }
    }

    pub fn get(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl LocationSlot for MemoryLocation {
    fn load(&mut self) -> Result<Option<String>, LocationError> {
        Ok(self.slot.clone())
    }

    fn store(&mut self, identifier: &str) -> Result<(), LocationError> {
        self.slot = Some(identifier.to_owned());
        Ok(())
    }
}

/// Keeps the percent-encoded identifier in a file, one line, no trailing newline.
#[derive(Clone, Debug)]
pub struct FileLocation {
    path: PathBuf,
}

impl FileLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> LocationError {
        LocationError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LocationSlot for FileLocation {
    fn load(&mut self) -> Result<Option<String>, LocationError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no saved identifier at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        decode(text).map(Some)
    }

    fn store(&mut self, identifier: &str) -> Result<(), LocationError> {
        fs::write(&self.path, encode(identifier)).map_err(|e| self.io_error(e))
    }
}
