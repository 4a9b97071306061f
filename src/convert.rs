use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Wrapper that applies a pure function to the inner matcher's value.
///
/// The function runs only on success; failure propagates unchanged. It
/// must be total over every value the inner matcher can yield — a panic
/// inside it is not a parse failure and is never absorbed by backtracking.
pub struct Convert {
    inner: MatcherRef,
    transform: Rc<dyn Fn(Value) -> Value>,
}

impl Convert {
    pub fn new(inner: MatcherRef, transform: Rc<dyn Fn(Value) -> Value>) -> Self {
        Convert { inner, transform }
    }
}

impl Matcher for Convert {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        match self.inner.apply(cursor) {
            Outcome::Matched(value) => Outcome::Matched((self.transform)(value)),
            Outcome::NoMatch => Outcome::NoMatch,
        }
    }
}

/// Convenience function to build a transforming wrapper from a
/// specification.
pub fn convert(
    inner: impl Into<Spec>,
    transform: impl Fn(Value) -> Value + 'static,
) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Convert::new(
        resolve(&inner.into())?,
        Rc::new(transform),
    )))
}
