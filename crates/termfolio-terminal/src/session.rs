//! Input session: the interpreter state and its event reducer.
//!
//! `reduce` is the only place state changes. The host owns the render loop,
//! feeds every key gesture in as an [`InputEvent`] and reads the buffer,
//! suggestion and history log back out.

use termfolio_types::InputEvent;

use crate::history::{History, HistoryRecord, Recall};
use crate::registry::CommandRegistry;
use crate::resolver::{self, Resolution};
use crate::suggest::suggest;

/// Everything that changes while the user interacts with the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpreterState {
    /// Text currently in the input field.
    pub buffer: String,
    /// Completion offered for `buffer`.
    pub suggestion: Option<String>,
    /// Committed commands and the replay cursor.
    pub history: History,
}

impl InterpreterState {
    pub fn history_cursor(&self) -> Option<usize> {
        self.history.cursor()
    }
}

/// Apply one event to the state.
///
/// Every buffer change recomputes the suggestion. Only free typing leaves
/// history browsing; recalled text keeps the cursor where it is.
pub fn reduce(
    mut state: InterpreterState,
    registry: &CommandRegistry,
    event: &InputEvent,
) -> InterpreterState {
    match event {
        InputEvent::TextChanged(text) => {
            state.buffer.clone_from(text);
            state.history.reset_cursor();
            state.suggestion = suggest(registry, &state.buffer);
        },
        InputEvent::Commit => match resolver::resolve(registry, &state.buffer) {
            Resolution::Ignored => {},
            Resolution::Reset => {
                log::debug!("Terminal cleared");
                state.history.clear();
                state.buffer.clear();
                state.suggestion = None;
            },
            Resolution::Record(record) => {
                log::debug!("Executed: {}", record.input);
                state.history.push(record);
                state.buffer.clear();
                state.suggestion = None;
            },
        },
        InputEvent::Complete => {
            if let Some(s) = state.suggestion.take() {
                state.buffer = s;
            }
        },
        InputEvent::RecallOlder => {
            let recall = state.history.recall_older();
            apply_recall(&mut state, registry, recall);
        },
        InputEvent::RecallNewer => {
            let recall = state.history.recall_newer();
            apply_recall(&mut state, registry, recall);
        },
    }
    state
}

fn apply_recall(state: &mut InterpreterState, registry: &CommandRegistry, recall: Recall) {
    match recall {
        Recall::Unchanged => return,
        Recall::Load(text) => state.buffer = text,
        Recall::Exit => state.buffer.clear(),
    }
    state.suggestion = suggest(registry, &state.buffer);
}

/// A registry plus the state it drives, with one entry point per host event.
#[derive(Debug, Clone)]
pub struct InputSession {
    registry: CommandRegistry,
    state: InterpreterState,
}

impl InputSession {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            state: InterpreterState::default(),
        }
    }

    /// Feed an event. Returns whether the host should suppress its default
    /// handling of the originating key.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &self.registry, event);
        event.prevents_default()
    }

    pub fn on_text_changed(&mut self, text: &str) -> bool {
        self.handle(&InputEvent::TextChanged(text.to_string()))
    }

    pub fn on_commit(&mut self) -> bool {
        self.handle(&InputEvent::Commit)
    }

    pub fn on_request_complete(&mut self) -> bool {
        self.handle(&InputEvent::Complete)
    }

    pub fn on_recall_older(&mut self) -> bool {
        self.handle(&InputEvent::RecallOlder)
    }

    pub fn on_recall_newer(&mut self) -> bool {
        self.handle(&InputEvent::RecallNewer)
    }

    pub fn current_buffer(&self) -> &str {
        &self.state.buffer
    }

    pub fn current_suggestion(&self) -> Option<&str> {
        self.state.suggestion.as_deref()
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.state.history_cursor()
    }

    pub fn history_log(&self) -> &[HistoryRecord] {
        self.state.history.records()
    }

    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
