use crate::cursor::Cursor;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::value::Value;
use std::rc::Rc;

/// Matcher for an exact text literal that yields the matched text.
///
/// Case-sensitive, anchored at the current position. Fails without
/// advancing when the input does not start with the expected text.
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }
}

impl Matcher for Literal {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        if cursor.rest().starts_with(&self.text) {
            cursor.advance(self.text.len());
            Outcome::Matched(Value::Text(self.text.clone()))
        } else {
            Outcome::NoMatch
        }
    }
}

/// Matcher for an exact text literal that discards the matched text.
///
/// Same matching behavior as `Literal`, but yields `Empty`. This is what a
/// bare text specification resolves to, so interpunction in sequences does
/// not displace the value of interest.
pub struct Punct {
    text: String,
}

impl Punct {
    pub fn new(text: impl Into<String>) -> Self {
        Punct { text: text.into() }
    }
}

impl Matcher for Punct {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        if cursor.rest().starts_with(&self.text) {
            cursor.advance(self.text.len());
            Outcome::Matched(Value::Empty)
        } else {
            Outcome::NoMatch
        }
    }
}

/// Convenience function for a text-yielding literal matcher.
pub fn literal(text: impl Into<String>) -> MatcherRef {
    Rc::new(Literal::new(text))
}

/// Convenience function for a text-discarding literal matcher.
pub fn punct(text: impl Into<String>) -> MatcherRef {
    Rc::new(Punct::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_matches_and_advances() {
        let mut cursor = Cursor::new("hello world");
        let matcher = literal("hello");
        assert_eq!(
            matcher.apply(&mut cursor),
            Outcome::Matched(Value::Text("hello".to_string()))
        );
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_literal_fails_without_advancing() {
        let mut cursor = Cursor::new("world");
        let matcher = literal("hello");
        assert_eq!(matcher.apply(&mut cursor), Outcome::NoMatch);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let mut cursor = Cursor::new("Hello");
        assert_eq!(literal("hello").apply(&mut cursor), Outcome::NoMatch);
    }

    #[test]
    fn test_literal_anchored_mid_input() {
        let mut cursor = Cursor::at("say hello", 4);
        assert!(literal("hello").apply(&mut cursor).is_match());
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn test_literal_does_not_scan_forward() {
        // "hello" appears later in the input but not at the position
        let mut cursor = Cursor::new("say hello");
        assert_eq!(literal("hello").apply(&mut cursor), Outcome::NoMatch);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_punct_advances_but_yields_nothing() {
        let mut cursor = Cursor::new("(rest");
        let matcher = punct("(");
        assert_eq!(matcher.apply(&mut cursor), Outcome::Matched(Value::Empty));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_punct_fails_like_literal() {
        let mut cursor = Cursor::new("x");
        assert_eq!(punct("(").apply(&mut cursor), Outcome::NoMatch);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_multibyte_literal() {
        let mut cursor = Cursor::new("héllo!");
        assert!(literal("héllo").apply(&mut cursor).is_match());
        assert_eq!(cursor.rest(), "!");
    }
}
