//! Text blobs read from the working root.
//!
//! A [`Document`] is the whole file held as one immutable string. Reading goes
//! through `std::fs::read_to_string`, so the handle is closed before any
//! phrase is looked up.

use std::path::Path;

use crate::types::{CheckError, CheckId};

#[derive(Debug, Clone)]
pub struct Document {
    text: String,
}

impl Document {
    /// Read `relative` under `root`. Any I/O failure, including a missing
    /// file, is returned untranslated inside [`CheckError::Io`].
    pub fn read(root: &Path, relative: &str, check: CheckId) -> Result<Self, CheckError> {
        let path = root.join(relative);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Self { text }),
            Err(source) => Err(CheckError::Io {
                check,
                path,
                source,
            }),
        }
    }

    pub fn exists(root: &Path, relative: &str) -> bool {
        root.join(relative).exists()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.text.contains(phrase)
    }
}
