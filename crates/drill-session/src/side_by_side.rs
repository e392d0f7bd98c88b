//! Free-typing buffer for the side-by-side mode.
//!
//! No evaluation against the reference happens here; the buffer just
//! holds whatever the user typed, with a revision counter so hosts can
//! tell real edits from redundant set calls.

#[derive(Debug, Default, Clone)]
pub struct TypedBuffer {
    value: String,
    revision: u64,
}

impl TypedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the contents. Bumps the revision only on an actual change.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.value {
            self.value = value;
            self.revision += 1;
        }
    }

    pub fn clear(&mut self) {
        if !self.value.is_empty() {
            self.value.clear();
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_bump_the_revision() {
        let mut buf = TypedBuffer::new();
        assert_eq!(buf.revision(), 0);
        buf.set_value("let x = 1;");
        assert_eq!(buf.value(), "let x = 1;");
        assert_eq!(buf.revision(), 1);
    }

    #[test]
    fn redundant_set_is_not_an_edit() {
        let mut buf = TypedBuffer::new();
        buf.set_value("a");
        buf.set_value("a");
        assert_eq!(buf.revision(), 1);
    }

    #[test]
    fn clear_empties_once() {
        let mut buf = TypedBuffer::new();
        buf.set_value("a");
        buf.clear();
        assert_eq!(buf.value(), "");
        assert_eq!(buf.revision(), 2);
        buf.clear();
        assert_eq!(buf.revision(), 2);
    }
}
