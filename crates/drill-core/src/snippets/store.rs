use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value};
use tracing::warn;

use super::{Folder, NewSnippet, Snippet, StoreError};

/// Top-level document key holding the snippet records.
pub const SNIPPETS_KEY: &str = "customSnippets";
/// Top-level document key holding the folder records.
pub const FOLDERS_KEY: &str = "snippetFolders";

/// In-memory snippet/folder collection backed by a two-key JSON document.
#[derive(Debug, Default)]
pub struct SnippetStore {
    snippets: Vec<Snippet>,
    folders: Vec<Folder>,
    /// Disambiguates ids minted within the same millisecond.
    id_seq: u64,
}

impl SnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON document at `path`. A missing file yields an empty
    /// store; a corrupt value under either key is logged and replaced with
    /// an empty default for that key only. Only real I/O failures error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::new());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let doc: Map<String, Value> = match serde_json::from_str(&text) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!(found = %value_kind(&other), "snippet store is not a JSON object, starting empty");
                Map::new()
            }
            Err(e) => {
                warn!(error = %e, "snippet store unreadable, starting empty");
                Map::new()
            }
        };

        Ok(Self {
            snippets: decode_key(&doc, SNIPPETS_KEY),
            folders: decode_key(&doc, FOLDERS_KEY),
            id_seq: 0,
        })
    }

    /// Persist the current records verbatim under the two document keys.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let mut doc = Map::new();
        doc.insert(SNIPPETS_KEY.to_string(), serde_json::to_value(&self.snippets)?);
        doc.insert(FOLDERS_KEY.to_string(), serde_json::to_value(&self.folders)?);
        let text = serde_json::to_string_pretty(&Value::Object(doc))?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn snippet(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    /// Snippets directly under `folder_id` (`None` for the tree root).
    pub fn snippets_in(&self, folder_id: Option<&str>) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|s| s.folder_id.as_deref() == folder_id)
            .collect()
    }

    pub fn add_folder(&mut self, name: &str) -> &Folder {
        let folder = Folder {
            id: self.mint_id("folder"),
            name: name.trim().to_string(),
            is_open: true,
        };
        self.folders.push(folder);
        self.folders.last().expect("just pushed")
    }

    pub fn add_snippet(&mut self, new: NewSnippet) -> &Snippet {
        let snippet = Snippet {
            id: self.mint_id("snippet"),
            name: new.name.trim().to_string(),
            language: new.language,
            code: new.code,
            folder_id: new.folder_id.filter(|id| !id.is_empty()),
        };
        self.snippets.push(snippet);
        self.snippets.last().expect("just pushed")
    }

    /// Remove a snippet by id. Returns whether anything was removed.
    pub fn delete_snippet(&mut self, id: &str) -> bool {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.id != id);
        self.snippets.len() != before
    }

    /// Flip a folder's open state. Returns the new state, `None` if unknown.
    pub fn toggle_folder(&mut self, id: &str) -> Option<bool> {
        let folder = self.folders.iter_mut().find(|f| f.id == id)?;
        folder.is_open = !folder.is_open;
        Some(folder.is_open)
    }

    fn mint_id(&mut self, prefix: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.id_seq += 1;
        format!("{}-{}-{}", prefix, millis, self.id_seq)
    }
}

/// Decode one document key, falling back to empty on any shape mismatch.
fn decode_key<T: serde::de::DeserializeOwned>(doc: &Map<String, Value>, key: &str) -> Vec<T> {
    match doc.get(key) {
        None => Vec::new(),
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(records) => records,
            Err(e) => {
                warn!(key, error = %e, "discarding malformed store key");
                Vec::new()
            }
        },
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
