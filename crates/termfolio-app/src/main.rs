//! termfolio entry point.
//!
//! Line-oriented front end for the portfolio terminal. Each stdin line is
//! typed and committed; a trailing Tab completes instead. `:up` / `:down`
//! replay history, `:tab` / `:enter` press those keys, `:quit` exits.

mod app_state;
mod input;
mod render;
mod setup;

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use app_state::AppState;
use input::HostCommand;
use termfolio_header::Header;
use termfolio_terminal::InputSession;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, TERMFOLIO_CONFIG env var, or defaults.
    let path = setup::config_path(
        std::env::args().nth(1),
        std::env::var(setup::CONFIG_ENV).ok(),
    );
    let config = setup::load_config(path.as_deref()).context("loading config")?;
    let registry = setup::build_registry(&config).context("building command registry")?;
    log::info!("Starting termfolio ({} commands)", registry.len());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut header = Header::new(config.header_link.clone(), seed);
    header.settle(&chrono::Local::now());

    let mut state = AppState::new(config, InputSession::new(registry), header);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    state.draw_header(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match input::parse_line(&line) {
            HostCommand::Quit => break,
            HostCommand::Events(events) => {
                state.header.settle(&chrono::Local::now());
                state.apply(&events, &mut out)?;
            },
        }
    }

    log::info!("termfolio exiting");
    Ok(())
}
