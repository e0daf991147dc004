//! Per-request records flowing from the listing to the rendered page.

use serde::{Deserialize, Serialize};

/// One remote resource returned by the directory listing (or the fixture).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Display name: the final path segment.
    pub name: String,
    /// Resource reference as the server reported it; may start with `/`.
    pub path: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Best match from the metadata search. Absence of a match is `None`, never
/// an empty instance of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataResult {
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    /// `"movie"`, `"tv"` or `"person"` as reported by the search.
    pub media_type: Option<String>,
}

/// Final row handed to the page renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub play_link: String,
}
