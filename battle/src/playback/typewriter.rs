//! Character-by-character text reveal

/// Reveal state of the textbox. Advanced one character per tick by
/// whoever owns the clock; starting a new line discards the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the revealed prefix
    revealed: usize,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start revealing `text`, cancelling any line still in progress
    pub fn start(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revealed = 0;
    }

    /// Advance one character. Returns the revealed prefix, or `None` when
    /// there was nothing left to reveal.
    pub fn tick(&mut self) -> Option<&str> {
        let next = self.text[self.revealed..].chars().next()?;
        self.revealed += next.len_utf8();
        Some(&self.text[..self.revealed])
    }

    /// Reveal the rest at once
    pub fn finish(&mut self) -> &str {
        self.revealed = self.text.len();
        &self.text
    }

    pub fn is_active(&self) -> bool {
        self.revealed < self.text.len()
    }

    pub fn revealed(&self) -> &str {
        &self.text[..self.revealed]
    }

    /// Full line being revealed
    pub fn line(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new();
        tw.start("Oi!");

        assert!(tw.is_active());
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.tick(), Some("O"));
        assert_eq!(tw.tick(), Some("Oi"));
        assert_eq!(tw.tick(), Some("Oi!"));
        assert!(!tw.is_active());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut tw = Typewriter::new();
        tw.start("Não");

        tw.tick();
        assert_eq!(tw.tick(), Some("Nã"));
        assert_eq!(tw.tick(), Some("Não"));
    }

    #[test]
    fn test_empty_line_completes_instantly() {
        let mut tw = Typewriter::new();
        tw.start("");

        assert!(!tw.is_active());
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.revealed(), "");
    }

    #[test]
    fn test_new_line_cancels_previous() {
        let mut tw = Typewriter::new();
        tw.start("Primeira mensagem");
        tw.tick();
        tw.tick();

        tw.start("Nova");
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.tick(), Some("N"));
        assert_eq!(tw.line(), "Nova");
    }

    #[test]
    fn test_finish() {
        let mut tw = Typewriter::new();
        tw.start("Tentando fugir...");
        assert_eq!(tw.finish(), "Tentando fugir...");
        assert!(!tw.is_active());
    }
}
