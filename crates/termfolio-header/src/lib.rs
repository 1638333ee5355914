//! Header shown above the terminal: logo, typed intro, link and clock.
//!
//! Nothing here shares state with the interpreter. The host drives it with
//! elapsed time through [`Header::tick`].

pub mod banner;
pub mod clock;
pub mod typewriter;

use chrono::{Datelike, Timelike};
use termfolio_types::HeaderLink;

pub use banner::{BANNER, banner_lines, pick_emoji};
pub use clock::{Clock, format_clock};
pub use typewriter::{Intro, Typewriter};

/// Runtime state of the header.
#[derive(Debug)]
pub struct Header {
    pub link: Option<HeaderLink>,
    pub clock: Clock,
    pub intro: Intro,
}

impl Header {
    pub fn new(link: Option<HeaderLink>, emoji_seed: u64) -> Self {
        let emoji = pick_emoji(emoji_seed);
        log::debug!("Header emoji: {emoji}");
        Self {
            link,
            clock: Clock::new(),
            intro: Intro::new(banner::WELCOME, emoji, banner::INSTRUCTIONS),
        }
    }

    /// Advance animations by `dt_ms`, refreshing the clock from `now` when due.
    pub fn tick<T: Datelike + Timelike>(&mut self, dt_ms: u32, now: &T) {
        self.intro.tick(dt_ms);
        if self.clock.tick(dt_ms) {
            self.clock.update(now);
        }
    }

    /// Skip the intro animation and show the current time.
    pub fn settle<T: Datelike + Timelike>(&mut self, now: &T) {
        while !self.intro.is_finished() {
            self.intro.tick(u32::MAX);
        }
        self.clock.update(now);
    }

    /// Render the header as plain lines.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        let link = self
            .link
            .as_ref()
            .map(|l| format!("[{}]({})", l.label(), l.url))
            .unwrap_or_default();
        out.push(format!("{link}  {}", self.clock.text()).trim().to_string());
        out.extend(banner_lines().map(str::to_string));
        out.push(self.intro.welcome_line());
        out.push(self.intro.instructions_line().to_string());
        out
    }
}
