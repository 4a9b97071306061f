use crate::cursor::Cursor;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::value::Value;
use std::rc::Rc;

/// Matcher that succeeds only at the end of the input.
///
/// Consumes nothing and yields nothing either way.
pub struct Eof;

impl Matcher for Eof {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        if cursor.at_end() {
            Outcome::Matched(Value::Empty)
        } else {
            Outcome::NoMatch
        }
    }
}

/// Convenience function for the end-of-input matcher.
pub fn eof() -> MatcherRef {
    Rc::new(Eof)
}
