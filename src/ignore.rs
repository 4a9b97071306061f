use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Wrapper that discards the inner matcher's value.
///
/// The inner matcher still consumes input and its failure still
/// propagates; only the yielded value is replaced with `Empty`.
pub struct Ignore {
    inner: MatcherRef,
}

impl Ignore {
    pub fn new(inner: MatcherRef) -> Self {
        Ignore { inner }
    }
}

impl Matcher for Ignore {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        match self.inner.apply(cursor) {
            Outcome::Matched(_) => Outcome::Matched(Value::Empty),
            Outcome::NoMatch => Outcome::NoMatch,
        }
    }
}

/// Convenience function to build an ignoring wrapper from a specification.
pub fn ignore(inner: impl Into<Spec>) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Ignore::new(resolve(&inner.into())?)))
}
