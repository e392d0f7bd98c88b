//! Mode switching and content resolution behavior.

use drill_core::classify::{Key, RawKeyEvent};
use drill_core::samples;
use drill_core::snippets::{NewSnippet, SnippetStore};
use drill_session::{EditorMode, Workspace};

fn snippet(name: &str, language: &str, code: &str) -> NewSnippet {
    NewSnippet {
        name: name.to_string(),
        language: language.to_string(),
        code: code.to_string(),
        folder_id: None,
    }
}

#[test]
fn starts_side_by_side_on_the_default_sample() {
    let ws = Workspace::new(SnippetStore::new());
    assert_eq!(ws.mode(), EditorMode::SideBySide);
    assert_eq!(ws.language(), samples::DEFAULT_LANGUAGE);
    assert_eq!(ws.current_code(), samples::fallback_sample());
    assert!(ws.guided().is_none());
}

#[test]
fn unsupported_startup_language_falls_back() {
    let ws = Workspace::with_language(SnippetStore::new(), "cobol");
    assert_eq!(ws.language(), samples::DEFAULT_LANGUAGE);
}

#[test]
fn entering_guided_builds_a_fresh_session() {
    let mut ws = Workspace::new(SnippetStore::new());
    ws.set_mode(EditorMode::Guided);

    let session = ws.guided().expect("guided session exists");
    assert_eq!(session.progress(), 0);
    assert_eq!(session.reference().source(), samples::fallback_sample());
}

#[test]
fn leaving_guided_discards_progress() {
    let mut ws = Workspace::new(SnippetStore::new());
    ws.set_mode(EditorMode::Guided);
    let first = ws.current_code().chars().next().unwrap();
    ws.handle_input(&RawKeyEvent::ch(first));
    assert_eq!(ws.guided().unwrap().progress(), 1);

    ws.set_mode(EditorMode::SideBySide);
    assert!(ws.guided().is_none());

    // Re-entry starts over rather than resuming.
    ws.set_mode(EditorMode::Guided);
    assert_eq!(ws.guided().unwrap().progress(), 0);
}

#[test]
fn redundant_mode_switch_preserves_the_session() {
    let mut ws = Workspace::new(SnippetStore::new());
    ws.set_mode(EditorMode::Guided);
    let first = ws.current_code().chars().next().unwrap();
    ws.handle_input(&RawKeyEvent::ch(first));

    ws.set_mode(EditorMode::Guided);
    assert_eq!(ws.guided().unwrap().progress(), 1);
}

#[test]
fn selecting_a_snippet_switches_content_and_language() {
    let mut store = SnippetStore::new();
    let id = store.add_snippet(snippet("fib", "python", "def fib(n): ...")).id.clone();

    let mut ws = Workspace::new(store);
    assert!(ws.select_snippet(&id));
    assert_eq!(ws.language(), "python");
    assert_eq!(ws.selected_snippet(), Some(id.as_str()));
    assert_eq!(ws.current_code(), "def fib(n): ...");
}

#[test]
fn selecting_an_unknown_snippet_changes_nothing() {
    let mut ws = Workspace::new(SnippetStore::new());
    assert!(!ws.select_snippet("missing"));
    assert_eq!(ws.selected_snippet(), None);
    assert_eq!(ws.current_code(), samples::fallback_sample());
}

#[test]
fn snippet_with_unsupported_language_keeps_current_language() {
    let mut store = SnippetStore::new();
    let id = store
        .add_snippet(snippet("legacy", "cobol", "DISPLAY 'HI'."))
        .id
        .clone();

    let mut ws = Workspace::new(store);
    assert!(ws.select_snippet(&id));
    assert_eq!(ws.language(), samples::DEFAULT_LANGUAGE);
    assert_eq!(ws.current_code(), "DISPLAY 'HI'.");
}

#[test]
fn content_change_resets_guided_progress_and_typed_buffer() {
    let mut store = SnippetStore::new();
    let id = store.add_snippet(snippet("s", "rust", "fn a() {}")).id.clone();

    let mut ws = Workspace::new(store);
    ws.typed_mut().set_value("scratch work");
    ws.set_mode(EditorMode::Guided);
    let first = ws.current_code().chars().next().unwrap();
    ws.handle_input(&RawKeyEvent::ch(first));

    assert!(ws.select_snippet(&id));
    let session = ws.guided().unwrap();
    assert_eq!(session.progress(), 0);
    assert_eq!(session.reference().source(), "fn a() {}");
    assert_eq!(ws.typed().value(), "");
}

#[test]
fn set_language_deselects_the_snippet() {
    let mut store = SnippetStore::new();
    let id = store.add_snippet(snippet("s", "rust", "fn a() {}")).id.clone();

    let mut ws = Workspace::new(store);
    ws.select_snippet(&id);
    assert!(ws.set_language("typescript"));
    assert_eq!(ws.selected_snippet(), None);
    assert_eq!(ws.current_code(), samples::sample_for("typescript").unwrap());

    assert!(!ws.set_language("cobol"));
    assert_eq!(ws.language(), "typescript");
}

#[test]
fn deleting_the_active_snippet_falls_back_to_the_sample() {
    let mut store = SnippetStore::new();
    let id = store.add_snippet(snippet("s", "python", "print(1)")).id.clone();

    let mut ws = Workspace::new(store);
    ws.select_snippet(&id);
    ws.set_mode(EditorMode::Guided);

    assert!(ws.delete_snippet(&id));
    assert_eq!(ws.selected_snippet(), None);
    assert_eq!(ws.current_code(), samples::sample_for("python").unwrap());
    assert_eq!(
        ws.guided().unwrap().reference().source(),
        samples::sample_for("python").unwrap()
    );
}

#[test]
fn dangling_selection_renders_a_placeholder() {
    let mut store = SnippetStore::new();
    let id = store.add_snippet(snippet("s", "rust", "fn a() {}")).id.clone();

    let mut ws = Workspace::new(store);
    ws.select_snippet(&id);
    // Removed behind the workspace's back.
    ws.store_mut().delete_snippet(&id);
    assert!(ws.current_code().contains("not found"));
}

#[test]
fn added_snippet_becomes_active() {
    let mut ws = Workspace::new(SnippetStore::new());
    let id = ws.add_snippet(snippet("new", "rust", "fn b() {}"));
    assert_eq!(ws.selected_snippet(), Some(id.as_str()));
    assert_eq!(ws.current_code(), "fn b() {}");
    assert_eq!(ws.language(), "rust");
}

#[test]
fn side_by_side_mode_consumes_nothing() {
    let mut ws = Workspace::new(SnippetStore::new());
    let response = ws.handle_input(&RawKeyEvent::ch('a'));
    assert!(!response.consumed);
    assert_eq!(response.caret, None);

    let response = ws.handle_input(&RawKeyEvent::plain(Key::Backspace));
    assert!(!response.consumed);
}
