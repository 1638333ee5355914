//! Terminal configuration and registry files (TOML).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TermfolioError};
use crate::payload::{Payload, RichContent};

/// Runtime configuration for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt printed before every echoed command.
    pub prompt: String,
    /// Names per row in the `help` grid.
    pub help_columns: usize,
    /// Cell width of each name in the `help` grid.
    pub help_column_width: usize,
    /// Name column width in the `commands` listing.
    pub commands_name_width: usize,
    /// Registry file to load instead of the built-in one.
    pub registry_path: Option<PathBuf>,
    /// Link shown in the header.
    pub header_link: Option<HeaderLink>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "user@anonymous~$:".to_string(),
            help_columns: 4,
            help_column_width: 15,
            commands_name_width: 12,
            registry_path: None,
            header_link: None,
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(toml_str)?;
        if cfg.help_columns == 0 {
            return Err(TermfolioError::Config(
                "help_columns must be at least 1".to_string(),
            ));
        }
        Ok(cfg)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml(&text)
    }
}

/// A header link (`label` defaults to "Meu Link").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderLink {
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl HeaderLink {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("Meu Link")
    }
}

/// One `[[command]]` table from a registry file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rich: Option<RichContent>,
}

impl CommandSpec {
    /// The payload this command resolves to, if any.
    ///
    /// A table carrying both `text` and `rich` is rejected by
    /// [`parse_registry`], so at most one is set here.
    pub fn payload(&self) -> Option<Payload> {
        match (&self.text, &self.rich) {
            (Some(t), _) => Some(Payload::Text(t.clone())),
            (None, Some(r)) => Some(Payload::Rich(r.clone())),
            (None, None) => None,
        }
    }
}

/// Parse and validate a registry TOML file into command specs, in file order.
///
/// Names must be non-empty, lower-case, free of whitespace and unique.
pub fn parse_registry(toml_str: &str) -> Result<Vec<CommandSpec>> {
    #[derive(Deserialize)]
    struct RegistryFile {
        #[serde(default)]
        command: Vec<CommandSpec>,
    }

    let file: RegistryFile = toml::from_str(toml_str)?;

    let mut seen: Vec<&str> = Vec::with_capacity(file.command.len());
    for spec in &file.command {
        let name = spec.name.as_str();
        if name.is_empty() {
            return Err(TermfolioError::Registry("empty command name".to_string()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(TermfolioError::Registry(format!(
                "command name contains whitespace: {name:?}"
            )));
        }
        if name != name.to_lowercase() {
            return Err(TermfolioError::Registry(format!(
                "command name must be lower-case: {name}"
            )));
        }
        if seen.contains(&name) {
            return Err(TermfolioError::Registry(format!(
                "duplicate command name: {name}"
            )));
        }
        if spec.text.is_some() && spec.rich.is_some() {
            return Err(TermfolioError::Registry(format!(
                "command {name} has both text and rich output"
            )));
        }
        seen.push(name);
    }
    Ok(file.command)
}

/// Read and validate a registry file from disk.
pub fn load_registry(path: &Path) -> Result<Vec<CommandSpec>> {
    let text = std::fs::read_to_string(path)?;
    let specs = parse_registry(&text)?;
    log::info!("Loaded {} commands from {}", specs.len(), path.display());
    Ok(specs)
}
