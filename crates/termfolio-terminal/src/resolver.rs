//! Commit-time classification and execution of the input buffer.

use termfolio_types::Payload;

use crate::history::HistoryRecord;
use crate::registry::CommandRegistry;

/// Prefix of the payload produced for unknown commands.
pub const NOT_FOUND_PREFIX: &str = "Command not found: ";

/// Outcome of committing a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Blank input: nothing happens.
    Ignored,
    /// `clear`: the history log, buffer and cursor are reset.
    Reset,
    /// Anything else: a record to append to the history log.
    Record(HistoryRecord),
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Classify and execute a committed line.
///
/// Never fails: an unknown name resolves to a `Command not found` text
/// payload echoing the normalized input.
pub fn resolve(registry: &CommandRegistry, input: &str) -> Resolution {
    let line = normalize(input);
    if line.is_empty() {
        return Resolution::Ignored;
    }

    let output = match line.as_str() {
        "clear" => return Resolution::Reset,
        "help" | "?" => Payload::Text(registry.help_listing()),
        "commands" => Payload::Text(registry.command_listing()),
        name => match registry.lookup(name).and_then(|e| e.output.clone()) {
            Some(payload) => payload,
            None => {
                log::debug!("Unknown command: {name}");
                Payload::Text(format!("{NOT_FOUND_PREFIX}{name}"))
            },
        },
    };

    Resolution::Record(HistoryRecord {
        input: line,
        output,
    })
}
