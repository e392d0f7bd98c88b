//! Editor mode control and content selection.
//!
//! The workspace decides what text the guided session practices against
//! (selected snippet, else the sample for the active language, else the
//! fallback sample) and when guided state is created, reset or discarded.
//! Guided progress never survives a mode switch or a content change.

use tracing::{debug, warn};

use drill_core::classify::RawKeyEvent;
use drill_core::samples;
use drill_core::snippets::{NewSnippet, SnippetStore};

use crate::guided::{GuidedSession, InputResponse};
use crate::side_by_side::TypedBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    SideBySide,
    Guided,
}

pub struct Workspace {
    mode: EditorMode,
    store: SnippetStore,
    language: String,
    selected_snippet: Option<String>,
    typed: TypedBuffer,
    guided: Option<GuidedSession>,
}

impl Workspace {
    pub fn new(store: SnippetStore) -> Self {
        Self::with_language(store, samples::DEFAULT_LANGUAGE)
    }

    /// Start in side-by-side mode with the given language active. An
    /// unsupported language falls back to the default.
    pub fn with_language(store: SnippetStore, language: &str) -> Self {
        let language = if samples::is_supported(language) {
            language.to_string()
        } else {
            warn!(language, "unsupported startup language, using default");
            samples::DEFAULT_LANGUAGE.to_string()
        };
        Self {
            mode: EditorMode::SideBySide,
            store,
            language,
            selected_snippet: None,
            typed: TypedBuffer::new(),
            guided: None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn selected_snippet(&self) -> Option<&str> {
        self.selected_snippet.as_deref()
    }

    pub fn store(&self) -> &SnippetStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SnippetStore {
        &mut self.store
    }

    pub fn typed(&self) -> &TypedBuffer {
        &self.typed
    }

    pub fn typed_mut(&mut self) -> &mut TypedBuffer {
        &mut self.typed
    }

    pub fn guided(&self) -> Option<&GuidedSession> {
        self.guided.as_ref()
    }

    pub fn guided_mut(&mut self) -> Option<&mut GuidedSession> {
        self.guided.as_mut()
    }

    /// The text currently driving both panes. A selected-but-missing
    /// snippet renders a placeholder rather than silently substituting
    /// other content.
    pub fn current_code(&self) -> String {
        if let Some(id) = &self.selected_snippet {
            return match self.store.snippet(id) {
                Some(snippet) => snippet.code.clone(),
                None => format!("// Error: Snippet with ID {id} not found."),
            };
        }
        samples::sample_for(&self.language)
            .unwrap_or_else(samples::fallback_sample)
            .to_string()
    }

    /// Switch modes. Entering guided mode builds a fresh session over the
    /// current content; leaving it discards the session outright.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode {
            return;
        }
        debug!(?mode, "mode switch");
        self.mode = mode;
        match mode {
            EditorMode::Guided => {
                self.guided = Some(GuidedSession::new(self.current_code()));
            }
            EditorMode::SideBySide => {
                self.guided = None;
            }
        }
    }

    /// Select a stored snippet as the practice content. Returns `false`
    /// and changes nothing if the id is unknown. A snippet recorded with
    /// an unsupported language keeps the current language active.
    pub fn select_snippet(&mut self, id: &str) -> bool {
        let Some(snippet) = self.store.snippet(id) else {
            warn!(id, "selected snippet does not exist");
            return false;
        };
        if samples::is_supported(&snippet.language) {
            self.language = snippet.language.clone();
        } else {
            warn!(id, language = %snippet.language, "snippet has unsupported language");
        }
        self.selected_snippet = Some(id.to_string());
        self.on_content_changed();
        true
    }

    /// Drop any snippet selection and practice the sample for `language`.
    pub fn set_language(&mut self, language: &str) -> bool {
        if !samples::is_supported(language) {
            warn!(language, "ignoring unsupported language");
            return false;
        }
        self.language = language.to_string();
        self.selected_snippet = None;
        self.on_content_changed();
        true
    }

    /// Add a snippet and make it the active content.
    pub fn add_snippet(&mut self, new: NewSnippet) -> String {
        let id = self.store.add_snippet(new).id.clone();
        self.select_snippet(&id);
        id
    }

    /// Delete a snippet; if it was active, fall back to the language sample.
    pub fn delete_snippet(&mut self, id: &str) -> bool {
        let removed = self.store.delete_snippet(id);
        if removed && self.selected_snippet.as_deref() == Some(id) {
            self.selected_snippet = None;
            self.on_content_changed();
        }
        removed
    }

    /// Route a raw key event. Only guided mode consumes events; in
    /// side-by-side mode the host surface edits its buffer natively.
    pub fn handle_input(&mut self, event: &RawKeyEvent) -> InputResponse {
        match self.guided.as_mut() {
            Some(session) => session.handle_input(event),
            None => InputResponse {
                consumed: false,
                caret: None,
            },
        }
    }

    /// Content changed under us: the scratch buffer and any in-flight
    /// guided progress are stale.
    fn on_content_changed(&mut self) {
        self.typed.clear();
        if self.guided.is_some() {
            let code = self.current_code();
            if let Some(session) = self.guided.as_mut() {
                session.replace_reference(code);
            }
        }
    }
}
