//! # Display Sinks
//!
//! The single text target a submission writes to. Every write replaces the
//! previous content; nothing is appended.

/// A writable text target, overwritten on each submission.
pub trait DisplaySink {
    /// Replace the visible text with `text`
    fn display(&mut self, text: &str);
}

/// In-memory sink that front-ends render from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSink {
    text: String,
}

impl TextSink {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl DisplaySink for TextSink {
    fn display(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

impl DisplaySink for String {
    fn display(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_overwrites() {
        let mut sink = TextSink::default();
        assert!(sink.is_blank());

        sink.display("first message");
        sink.display("2");
        assert_eq!(sink.text(), "2");
    }

    #[test]
    fn test_string_sink() {
        let mut sink = String::from("stale");
        sink.display("fresh");
        assert_eq!(sink, "fresh");
    }
}
