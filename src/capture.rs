use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Wrapper that yields the exact substring the inner matcher consumed.
///
/// The span runs from the position before the inner matcher to the
/// position after it, regardless of what the inner matcher itself yielded.
/// Failure propagates unchanged.
pub struct Capture {
    inner: MatcherRef,
}

impl Capture {
    pub fn new(inner: MatcherRef) -> Self {
        Capture { inner }
    }
}

impl Matcher for Capture {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let start = cursor.position();
        match self.inner.apply(cursor) {
            Outcome::Matched(_) => {
                let consumed = &cursor.text()[start..cursor.position()];
                Outcome::Matched(Value::Text(consumed.to_string()))
            }
            Outcome::NoMatch => Outcome::NoMatch,
        }
    }
}

/// Convenience function to build a capturing wrapper from a specification.
pub fn capture(inner: impl Into<Spec>) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Capture::new(resolve(&inner.into())?)))
}
