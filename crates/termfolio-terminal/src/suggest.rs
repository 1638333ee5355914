//! Tab-completion suggestions.

use crate::registry::CommandRegistry;

/// First registered name, in registry order, that completes `buffer`.
///
/// The buffer is lower-cased but not trimmed. A name equal to the buffer
/// has nothing left to complete and yields `None`.
pub fn suggest(registry: &CommandRegistry, buffer: &str) -> Option<String> {
    if buffer.is_empty() {
        return None;
    }
    let prefix = buffer.to_lowercase();
    registry
        .list_names()
        .find(|name| name.starts_with(&prefix))
        .filter(|name| *name != prefix)
        .map(str::to_string)
}
