//! Wire types for the backing server's JSON representation.
//!
//! Field names are the de facto contract with the server and must stay
//! byte-for-byte as they are here; do not rename or re-case them.

use serde::{Deserialize, Serialize};

use crate::core::path::{self, NodeKind};

/// One child record in a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// Display name: the final path segment, suffixed with `/` for
    /// directories or `@` for symlinked directories.
    pub name: String,
    /// Absolute path of the child.
    pub path: String,
    /// Size in bytes; absent for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Entry {
    /// Node kind derived from the name suffix.
    pub fn kind(&self) -> NodeKind {
        path::classify(&self.name)
    }

    /// Whether this entry denotes a directory.
    pub fn is_directory(&self) -> bool {
        self.kind() == NodeKind::Directory
    }
}

/// Listing of one directory's children.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryListing {
    /// Path of the listed directory.
    pub path: String,
    /// Children, in the order the server returned them.
    pub items: Vec<Entry>,
}

impl DirectoryListing {
    /// Check the listing contract before it is committed to the stack.
    ///
    /// Paths must be absolute and each ordinary entry name must match the
    /// final segment of its path. Navigation pseudo-entries (`.`, `..`)
    /// served by some backends are tolerated.
    pub fn validate(&self) -> Result<(), String> {
        if !self.path.starts_with('/') {
            return Err(format!("listing path {:?} is not absolute", self.path));
        }
        for entry in &self.items {
            if entry.name.is_empty() {
                return Err(format!("entry under {:?} has an empty name", self.path));
            }
            if !entry.path.starts_with('/') {
                return Err(format!("entry path {:?} is not absolute", entry.path));
            }
            let stem = entry.name.trim_end_matches(['/', '@']);
            if stem.is_empty() || stem == "." || stem == ".." {
                continue;
            }
            if path::segments(&entry.path).last() != Some(&stem) {
                return Err(format!(
                    "entry name {:?} does not match its path {:?}",
                    entry.name, entry.path
                ));
            }
        }
        Ok(())
    }
}

/// Detail record for a single file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileRecord {
    /// Absolute path of the file.
    pub path: String,
    /// Display name.
    pub name: String,
    /// Size in bytes, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Unix-style permission string, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    /// File type description, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
}
