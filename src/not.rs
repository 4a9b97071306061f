use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Negative lookahead.
///
/// Succeeds, with no value and no advance, exactly when the inner matcher
/// fails; fails when it succeeds. The position is snapshotted and restored
/// on both outcomes, so lookahead never consumes input — including the
/// case where the inner matcher advanced before failing.
pub struct Not {
    inner: MatcherRef,
}

impl Not {
    pub fn new(inner: MatcherRef) -> Self {
        Not { inner }
    }
}

impl Matcher for Not {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let start = cursor.position();
        let outcome = self.inner.apply(cursor);
        cursor.set_position(start);
        match outcome {
            Outcome::Matched(_) => Outcome::NoMatch,
            Outcome::NoMatch => Outcome::Matched(Value::Empty),
        }
    }
}

/// Convenience function to build a negative lookahead from a specification.
pub fn not(inner: impl Into<Spec>) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Not::new(resolve(&inner.into())?)))
}
