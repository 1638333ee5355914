//! Host-agnostic input events for the terminal.
//!
//! Every host maps its native key handling to these events. The interpreter
//! never sees raw key codes.

/// An input event delivered to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user edited the input field; carries the whole new text.
    TextChanged(String),
    /// Enter: execute the current buffer.
    Commit,
    /// Tab: accept the current suggestion.
    Complete,
    /// Up arrow: replay an older command.
    RecallOlder,
    /// Down arrow: replay a newer command.
    RecallNewer,
}

impl InputEvent {
    /// Whether the host should suppress its own default handling of the key
    /// that produced this event (focus change on Tab, caret jump on arrows).
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::TextChanged(_))
    }
}

/// Keys a host recognises as interpreter gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Tab,
    Up,
    Down,
}

impl Key {
    /// Map a gesture key to its interpreter event.
    pub fn to_event(self) -> InputEvent {
        match self {
            Self::Enter => InputEvent::Commit,
            Self::Tab => InputEvent::Complete,
            Self::Up => InputEvent::RecallOlder,
            Self::Down => InputEvent::RecallNewer,
        }
    }
}
