use std::path::Path;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};

/// Asset key for the photo sent to companies that pass the hair-gel test.
pub const NAUGHTIES_BOYBAND: &str = "naughtiesBoyband";
/// Asset key for the photo sent to everyone else.
pub const TASTEFUL_CABLEKNIT: &str = "tastefulCableknit";

/// A photo asset loaded from disk.
///
/// Serializes as its content interpreted as UTF-8. Content that is not valid
/// UTF-8 cannot be put on the wire and fails serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headshot {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl Headshot {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// True when this headshot answers to `key`, either by exact file name
    /// or by file stem (`naughtiesBoyband.txt` answers to `naughtiesBoyband`).
    pub fn answers_to(&self, key: &str) -> bool {
        self.file_name == key
            || Path::new(&self.file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| stem == key)
    }
}

impl Serialize for Headshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = std::str::from_utf8(&self.content).map_err(|e| {
            S::Error::custom(format!("headshot '{}' is not valid UTF-8: {e}", self.file_name))
        })?;
        serializer.serialize_str(text)
    }
}
