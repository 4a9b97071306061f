use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Optional match: absorb the inner matcher's failure.
///
/// On success behaves like the inner matcher. On failure rewinds the
/// cursor to where it started and succeeds with `Empty` — the usual way to
/// allow a missing repetition (empty list bodies and the like).
pub struct Maybe {
    inner: MatcherRef,
}

impl Maybe {
    pub fn new(inner: MatcherRef) -> Self {
        Maybe { inner }
    }
}

impl Matcher for Maybe {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let start = cursor.position();
        match self.inner.apply(cursor) {
            Outcome::Matched(value) => Outcome::Matched(value),
            Outcome::NoMatch => {
                cursor.set_position(start);
                Outcome::Matched(Value::Empty)
            }
        }
    }
}

/// Convenience function to build an optional matcher from a specification.
pub fn maybe(inner: impl Into<Spec>) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Maybe::new(resolve(&inner.into())?)))
}
