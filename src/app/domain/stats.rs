use std::fmt;

use serde::Serialize;

/// Word and character counts for a piece of text.
///
/// `chars` is measured in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Words: {} • Chars: {}", self.words, self.chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let stats = TextStats { words: 3, chars: 17 };
        assert_eq!(stats.to_string(), "Words: 3 • Chars: 17");
        assert_eq!(TextStats::default().to_string(), "Words: 0 • Chars: 0");
    }

    #[test]
    fn test_serialize() {
        let stats = TextStats { words: 2, chars: 9 };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"words":2,"chars":9}"#);
    }
}
