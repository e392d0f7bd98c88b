//! User snippet and folder records with key-value JSON persistence.
//!
//! The on-disk document mirrors the persisted layout exactly: one JSON
//! object with two top-level keys, `customSnippets` and `snippetFolders`,
//! each holding its records verbatim. A corrupt value under either key is
//! logged and replaced with an empty default; it never reaches the
//! session layer as an error.

mod store;

pub use store::{SnippetStore, FOLDERS_KEY, SNIPPETS_KEY};

use serde::{Deserialize, Serialize};

/// A user-saved practice snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub name: String,
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

/// A folder grouping snippets in the tree view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub is_open: bool,
}

/// Fields supplied when creating a snippet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    pub name: String,
    pub language: String,
    pub code: String,
    pub folder_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
