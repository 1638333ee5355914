//! Character-by-character text reveal driven by elapsed time.

/// Delay per character of the welcome line.
pub const WELCOME_DELAY_MS: u32 = 100;
/// Delay per character of the instructions line.
pub const INSTRUCTIONS_DELAY_MS: u32 = 50;

/// Reveals `text` one character every `delay_ms`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    delay_ms: u32,
    elapsed_ms: u32,
    shown: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(text: &str, delay_ms: u32) -> Self {
        Self {
            text: text.to_string(),
            delay_ms: delay_ms.max(1),
            elapsed_ms: 0,
            shown: 0,
            total: text.chars().count(),
        }
    }

    /// Advance by `dt_ms` and return the visible prefix.
    pub fn tick(&mut self, dt_ms: u32) -> &str {
        if !self.is_finished() {
            self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
            self.shown = ((self.elapsed_ms / self.delay_ms) as usize).min(self.total);
        }
        self.visible()
    }

    /// The part of the text revealed so far.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.total
    }
}

/// The header's intro: welcome line, then the emoji, then the instructions.
#[derive(Debug, Clone)]
pub struct Intro {
    welcome: Typewriter,
    emoji: String,
    instructions: Typewriter,
}

impl Intro {
    pub fn new(welcome: &str, emoji: &str, instructions: &str) -> Self {
        Self {
            welcome: Typewriter::new(welcome, WELCOME_DELAY_MS),
            emoji: emoji.to_string(),
            instructions: Typewriter::new(instructions, INSTRUCTIONS_DELAY_MS),
        }
    }

    /// Advance the running line. The instructions start only after the
    /// welcome line has finished.
    pub fn tick(&mut self, dt_ms: u32) {
        if self.welcome.is_finished() {
            self.instructions.tick(dt_ms);
        } else {
            self.welcome.tick(dt_ms);
        }
    }

    /// First line: the typed welcome, with the emoji once it is complete.
    pub fn welcome_line(&self) -> String {
        if self.welcome.is_finished() {
            format!("{} {}", self.welcome.visible(), self.emoji)
        } else {
            self.welcome.visible().to_string()
        }
    }

    pub fn instructions_line(&self) -> &str {
        self.instructions.visible()
    }

    pub fn is_finished(&self) -> bool {
        self.welcome.is_finished() && self.instructions.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_delay() {
        let mut tw = Typewriter::new("abc", 100);
        assert_eq!(tw.tick(50), "");
        assert_eq!(tw.tick(50), "a");
        assert_eq!(tw.tick(150), "ab");
        assert_eq!(tw.tick(100), "abc");
        assert!(tw.is_finished());
        assert_eq!(tw.tick(1000), "abc");
    }

    #[test]
    fn multibyte_text() {
        let mut tw = Typewriter::new("olá😁", 10);
        assert_eq!(tw.tick(30), "olá");
        assert_eq!(tw.tick(10), "olá😁");
    }

    #[test]
    fn empty_text_is_finished() {
        let tw = Typewriter::new("", 10);
        assert!(tw.is_finished());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn intro_sequences_lines() {
        let mut intro = Intro::new("hi", "🤖", "go");
        intro.tick(100);
        assert_eq!(intro.welcome_line(), "h");
        assert_eq!(intro.instructions_line(), "");
        intro.tick(100);
        assert_eq!(intro.welcome_line(), "hi 🤖");
        intro.tick(50);
        assert_eq!(intro.instructions_line(), "g");
        intro.tick(50);
        assert!(intro.is_finished());
        assert_eq!(intro.instructions_line(), "go");
    }
}
