//! Maps stdin lines to interpreter events.
//!
//! Plain lines are typed and committed. A trailing tab asks for completion
//! instead of committing. `:up`, `:down`, `:tab` and `:enter` stand in for
//! the arrow, Tab and Enter keys.

use termfolio_types::{InputEvent, Key};

/// What the host should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Events(Vec<InputEvent>),
    Quit,
}

pub fn parse_line(line: &str) -> HostCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let key = match line {
        ":quit" | ":q" => return HostCommand::Quit,
        ":up" => Some(Key::Up),
        ":down" => Some(Key::Down),
        ":tab" => Some(Key::Tab),
        ":enter" => Some(Key::Enter),
        _ => None,
    };
    if let Some(key) = key {
        return HostCommand::Events(vec![key.to_event()]);
    }

    match line.strip_suffix('\t') {
        Some(partial) => HostCommand::Events(vec![
            InputEvent::TextChanged(partial.to_string()),
            Key::Tab.to_event(),
        ]),
        None => HostCommand::Events(vec![
            InputEvent::TextChanged(line.to_string()),
            Key::Enter.to_event(),
        ]),
    }
}
