//! Header clock: long Brazilian-Portuguese date and time.

use chrono::{Datelike, Timelike};

const WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Refresh interval of the header clock.
pub const CLOCK_INTERVAL_MS: u32 = 1000;

/// Format as e.g. `sábado, 18 de outubro de 2026 às 14:03:05`.
pub fn format_clock<T: Datelike + Timelike>(t: &T) -> String {
    let weekday = WEEKDAYS[t.weekday().num_days_from_monday() as usize];
    let month = MONTHS[t.month0() as usize];
    format!(
        "{weekday}, {:02} de {month} de {} às {:02}:{:02}:{:02}",
        t.day(),
        t.year(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Cached clock text, refreshed once per [`CLOCK_INTERVAL_MS`].
#[derive(Debug, Default)]
pub struct Clock {
    text: String,
    since_refresh_ms: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt_ms`; returns `true` when the text should be refreshed.
    ///
    /// The text starts empty, so the first refresh happens one full interval
    /// after creation.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        self.since_refresh_ms = self.since_refresh_ms.saturating_add(dt_ms);
        if self.since_refresh_ms >= CLOCK_INTERVAL_MS {
            self.since_refresh_ms %= CLOCK_INTERVAL_MS;
            true
        } else {
            false
        }
    }

    pub fn update<T: Datelike + Timelike>(&mut self, now: &T) {
        self.text = format_clock(now);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
