//! Command interpreter for the portfolio terminal.
//!
//! Commands live in an ordered [`CommandRegistry`]. Key gestures arrive as
//! [`InputEvent`](termfolio_types::InputEvent)s and are folded into an
//! [`InterpreterState`] by [`reduce`]; committed lines are classified by
//! [`resolve`] and appended to the [`History`] log.

mod commands;
mod history;
mod registry;
mod resolver;
mod session;
mod suggest;

/// Register the portfolio commands into a registry.
pub use commands::{builtin_registry, register_builtins};
/// Committed-command log with replay cursor.
pub use history::{History, HistoryRecord, Recall};
/// Ordered command registry.
pub use registry::{CommandEntry, CommandRegistry, ListingLayout};
/// Commit-time classification.
pub use resolver::{NOT_FOUND_PREFIX, Resolution, normalize, resolve};
/// Interpreter state, reducer and host-facing session.
pub use session::{InputSession, InterpreterState, reduce};
/// Tab-completion lookup.
pub use suggest::suggest;
