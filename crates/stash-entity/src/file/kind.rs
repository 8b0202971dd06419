//! File kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "file_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A folder: carries no payload, may parent other files.
    Folder,
    /// A regular file with payload bytes.
    File,
    /// An image with payload bytes.
    Image,
}

impl FileKind {
    /// Whether this kind carries payload bytes in the content store.
    pub fn has_content(&self) -> bool {
        !matches!(self, Self::Folder)
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(Self::Folder),
            "file" => Ok(Self::File),
            "image" => Ok(Self::Image),
            _ => Err(()),
        }
    }
}
