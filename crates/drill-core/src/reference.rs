//! Immutable snapshot of the text a guided session types against.
//!
//! The buffer is indexed by character slot (one Unicode scalar per slot),
//! never by byte, so the progress cursor and annotation table share a
//! single stable index space. A session never mutates its reference;
//! changing the source text means building a new buffer and resetting.

/// Fixed target text for one guided session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceBuffer {
    source: String,
    chars: Vec<char>,
}

impl ReferenceBuffer {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let chars = source.chars().collect();
        Self { source, chars }
    }

    /// Number of character slots.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Expected character at a slot, `None` past the end.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for ReferenceBuffer {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
