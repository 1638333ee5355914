//! Startup: configuration lookup and registry construction.

use std::path::{Path, PathBuf};

use termfolio_terminal::{CommandRegistry, ListingLayout, builtin_registry};
use termfolio_types::config::load_registry;
use termfolio_types::{Result, TerminalConfig};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TERMFOLIO_CONFIG";

/// Pick the config file: CLI argument first, then [`CONFIG_ENV`].
pub fn config_path(arg: Option<String>, env: Option<String>) -> Option<PathBuf> {
    arg.or(env).filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Load the config at `path`, or the defaults when there is none.
pub fn load_config(path: Option<&Path>) -> Result<TerminalConfig> {
    match path {
        Some(p) => TerminalConfig::load(p),
        None => Ok(TerminalConfig::default()),
    }
}

/// Build the registry named by the config, falling back to the built-ins.
pub fn build_registry(config: &TerminalConfig) -> Result<CommandRegistry> {
    let reg = match &config.registry_path {
        Some(path) => CommandRegistry::from_specs(load_registry(path)?),
        None => builtin_registry(),
    };
    Ok(reg.with_layout(ListingLayout::from(config)))
}
