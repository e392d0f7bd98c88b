//! Raw key event taxonomy and the pure intent classifier.
//!
//! Classification looks only at the event itself, never at the reference
//! buffer or the progress cursor, so the same event always yields the
//! same intent. The host suppresses the platform default action for every
//! intent except `PassThrough`; the engine is the sole authority over what
//! gets inserted or moved.

/// Modifier state delivered with a raw key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl or Cmd held, the clipboard/shortcut chord on either platform.
    pub fn command_held(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Physical key identity, pre-decoded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A key that would insert this single character.
    Char(char),
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
    /// Anything the host could not name (function keys, media keys, ...).
    Unidentified,
}

/// One raw input event as delivered by the host editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl RawKeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Plain character keystroke, no modifiers.
    pub fn ch(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::NONE)
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// What a blocked event would have done, had it not been intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedKind {
    Delete,
    Navigate,
    PageJump,
    Paste,
    Cut,
}

/// Closed taxonomy of input intents consumed by the guided state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    PrintableChar(char),
    NewlineIntent,
    Backspace,
    /// Suppressed without any state effect; linear typing only.
    Blocked(BlockedKind),
    /// Leave the event to the host untouched.
    PassThrough,
}

impl Intent {
    /// Whether the host must suppress the event's default action.
    pub fn consumes_default(&self) -> bool {
        !matches!(self, Intent::PassThrough)
    }
}

/// Map one raw event to exactly one intent.
pub fn classify(event: &RawKeyEvent) -> Intent {
    // Shortcut chords: clipboard operations are blocked, the rest pass
    // through (the host may have its own bindings for them).
    if event.modifiers.command_held() {
        return match event.key {
            Key::Char('v') | Key::Char('V') => Intent::Blocked(BlockedKind::Paste),
            Key::Char('x') | Key::Char('X') => Intent::Blocked(BlockedKind::Cut),
            _ => Intent::PassThrough,
        };
    }
    if event.modifiers.alt {
        return Intent::PassThrough;
    }

    match event.key {
        Key::Char(c) => Intent::PrintableChar(c),
        Key::Enter => Intent::NewlineIntent,
        Key::Backspace => Intent::Backspace,
        Key::Delete => Intent::Blocked(BlockedKind::Delete),
        Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown | Key::Home | Key::End => {
            Intent::Blocked(BlockedKind::Navigate)
        }
        Key::PageUp | Key::PageDown => Intent::Blocked(BlockedKind::PageJump),
        Key::Escape | Key::Unidentified => Intent::PassThrough,
    }
}
