use crate::cursor::Cursor;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::value::Value;
use std::rc::Rc;

/// Matcher for a single character drawn from an explicit set.
///
/// Advances by exactly one character on success and yields it as text.
pub struct OneOf {
    set: Vec<char>,
}

impl OneOf {
    pub fn new(set: impl IntoIterator<Item = char>) -> Self {
        OneOf {
            set: set.into_iter().collect(),
        }
    }
}

impl Matcher for OneOf {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        match cursor.peek() {
            Some(ch) if self.set.contains(&ch) => {
                cursor.advance(ch.len_utf8());
                Outcome::Matched(Value::Text(ch.to_string()))
            }
            _ => Outcome::NoMatch,
        }
    }
}

/// Matcher for a single character within an inclusive range.
pub struct CharRange {
    start: char,
    end: char,
}

impl CharRange {
    pub fn new(start: char, end: char) -> Self {
        CharRange { start, end }
    }
}

impl Matcher for CharRange {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        match cursor.peek() {
            Some(ch) if ch >= self.start && ch <= self.end => {
                cursor.advance(ch.len_utf8());
                Outcome::Matched(Value::Text(ch.to_string()))
            }
            _ => Outcome::NoMatch,
        }
    }
}

/// Convenience function: match one character out of `set`.
pub fn one_of(set: &str) -> MatcherRef {
    Rc::new(OneOf::new(set.chars()))
}

/// Convenience function: match one character in `start..=end`.
pub fn char_range(start: char, end: char) -> MatcherRef {
    Rc::new(CharRange::new(start, end))
}
