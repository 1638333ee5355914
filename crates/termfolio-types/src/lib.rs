//! Foundation types for termfolio.
//!
//! Shared by every termfolio crate: command payloads, host input events,
//! terminal configuration and registry files, and the error type.

pub mod config;
pub mod error;
pub mod input;
pub mod payload;

pub use config::{CommandSpec, HeaderLink, TerminalConfig};
pub use error::{Result, TermfolioError};
pub use input::{InputEvent, Key};
pub use payload::{Image, Link, Payload, ProfileField, RichContent};
