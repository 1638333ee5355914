//! Ordered command registry and its listings.

use termfolio_types::config::CommandSpec;
use termfolio_types::{Payload, TerminalConfig};

/// A registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Lower-case name, unique within the registry.
    pub name: String,
    /// One-line description for the `commands` listing.
    pub description: String,
    /// Result payload. `None` for meta commands the resolver intercepts.
    pub output: Option<Payload>,
}

impl CommandEntry {
    pub fn new(name: &str, description: &str, output: Option<Payload>) -> Self {
        Self {
            name: name.to_lowercase(),
            description: description.to_string(),
            output,
        }
    }
}

impl From<CommandSpec> for CommandEntry {
    fn from(spec: CommandSpec) -> Self {
        let output = spec.payload();
        Self::new(&spec.name, &spec.description, output)
    }
}

/// Column widths used by the `help` and `commands` listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLayout {
    pub help_columns: usize,
    pub help_column_width: usize,
    pub commands_name_width: usize,
}

impl Default for ListingLayout {
    fn default() -> Self {
        Self {
            help_columns: 4,
            help_column_width: 15,
            commands_name_width: 12,
        }
    }
}

impl From<&TerminalConfig> for ListingLayout {
    fn from(cfg: &TerminalConfig) -> Self {
        Self {
            help_columns: cfg.help_columns.max(1),
            help_column_width: cfg.help_column_width,
            commands_name_width: cfg.commands_name_width,
        }
    }
}

/// Registry of commands in insertion order.
///
/// Built once at startup and read-only afterwards. Lookups expect an
/// already-normalized (trimmed, lower-case) name.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    layout: ListingLayout,
}

impl CommandRegistry {
    /// Create an empty registry with the default listing layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from validated registry-file specs.
    pub fn from_specs(specs: Vec<CommandSpec>) -> Self {
        let mut reg = Self::new();
        for spec in specs {
            reg.register(spec.into());
        }
        reg
    }

    /// Replace the listing layout.
    pub fn with_layout(mut self, layout: ListingLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Register a command. An existing command with the same name is
    /// replaced in place, keeping its listing position.
    pub fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                log::warn!("Replacing registered command: {}", entry.name);
                *existing = entry;
            },
            None => self.entries.push(entry),
        }
    }

    /// Look up a normalized command name.
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Command names in registry order.
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// `(name, description)` pairs in registry order.
    pub fn list_entries(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.description.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn layout(&self) -> ListingLayout {
        self.layout
    }

    /// Names laid out left-to-right, top-to-bottom in a fixed-width grid.
    pub fn help_listing(&self) -> String {
        let ListingLayout {
            help_columns,
            help_column_width: width,
            ..
        } = self.layout;
        let names: Vec<&str> = self.list_names().collect();
        names
            .chunks(help_columns.max(1))
            .map(|row| {
                row.iter()
                    .map(|name| format!("{name:<width$}"))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One `name - description` line per command.
    pub fn command_listing(&self) -> String {
        let width = self.layout.commands_name_width;
        self.entries
            .iter()
            .map(|e| format!("{:<width$} - {}", e.name, e.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
