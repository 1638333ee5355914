use std::io::{self, Write};

use termfolio_header::Header;
use termfolio_terminal::InputSession;
use termfolio_types::{InputEvent, TerminalConfig};

use crate::render;

/// ANSI "erase screen, cursor home".
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// All mutable host state.
pub struct AppState {
    pub config: TerminalConfig,
    pub session: InputSession,
    pub header: Header,
    /// History records already written to the output.
    shown_records: usize,
}

impl AppState {
    pub fn new(config: TerminalConfig, session: InputSession, header: Header) -> Self {
        Self {
            config,
            session,
            header,
            shown_records: 0,
        }
    }

    pub fn draw_header(&self, out: &mut impl Write) -> io::Result<()> {
        for line in self.header.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }

    /// Feed events to the session, then write whatever changed.
    pub fn apply(&mut self, events: &[InputEvent], out: &mut impl Write) -> io::Result<()> {
        for event in events {
            self.session.handle(event);
        }
        self.sync_output(out)
    }

    fn sync_output(&mut self, out: &mut impl Write) -> io::Result<()> {
        let log = self.session.history_log();
        if log.len() < self.shown_records {
            write!(out, "{CLEAR_SCREEN}")?;
            self.draw_header(out)?;
            self.shown_records = 0;
        }

        let prompt = &self.config.prompt;
        let log = self.session.history_log();
        for record in &log[self.shown_records..] {
            for line in render::render_record(prompt, record) {
                writeln!(out, "{line}")?;
            }
        }
        self.shown_records = log.len();

        let buffer = self.session.current_buffer();
        if !buffer.is_empty() {
            writeln!(out, "{}", render::prompt_line(prompt, buffer))?;
        }
        if let Some(s) = self.session.current_suggestion() {
            writeln!(out, "{}", render::suggestion_line(s))?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{HostCommand, parse_line};
    use termfolio_terminal::builtin_registry;

    fn app() -> AppState {
        AppState::new(
            TerminalConfig::default(),
            InputSession::new(builtin_registry()),
            Header::new(None, 0),
        )
    }

    fn run(app: &mut AppState, line: &str) -> String {
        let mut out = Vec::new();
        match parse_line(line) {
            HostCommand::Events(events) => app.apply(&events, &mut out).unwrap(),
            HostCommand::Quit => panic!("unexpected quit"),
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn committed_command_is_echoed_with_output() {
        let mut app = app();
        let out = run(&mut app, "skills");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("user@anonymous~$: skills"));
        assert!(lines.next().unwrap().starts_with("HTML5"));
    }

    #[test]
    fn completion_shows_buffer_only() {
        let mut app = app();
        let out = run(&mut app, "soc\t");
        assert_eq!(out, "user@anonymous~$: social\n");
        assert!(app.session.history_log().is_empty());
    }

    #[test]
    fn only_new_records_are_written() {
        let mut app = app();
        run(&mut app, "skills");
        let out = run(&mut app, "nope");
        assert_eq!(
            out,
            "user@anonymous~$: nope\nCommand not found: nope\n"
        );
    }

    #[test]
    fn clear_redraws_header() {
        let mut app = app();
        run(&mut app, "skills");
        let out = run(&mut app, "clear");
        assert!(out.starts_with(CLEAR_SCREEN));
        assert!(!out.contains("skills"));
        let out = run(&mut app, "nope");
        assert!(out.starts_with("user@anonymous~$: nope"));
    }

    #[test]
    fn recall_previews_buffer() {
        let mut app = app();
        run(&mut app, "skills");
        let out = run(&mut app, ":up");
        assert_eq!(out, "user@anonymous~$: skills\n");
    }
}
