use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Positional composition: run each element in order against the same
/// cursor.
///
/// Fails as soon as any element fails, leaving the cursor wherever the
/// failure happened — rewinding is the job of whichever alternation or
/// repetition wraps the sequence. On success yields the value of the last
/// element that yielded a non-empty value; an all-empty sequence yields
/// `Empty`.
pub struct Sequence {
    items: Vec<MatcherRef>,
}

impl Sequence {
    /// Resolve a list of specifications. An empty list is an invalid
    /// specification, not a parse failure.
    pub fn resolve(items: &[Spec]) -> Result<Self, SpecError> {
        if items.is_empty() {
            return Err(SpecError::EmptySequence);
        }
        let items = items.iter().map(resolve).collect::<Result<_, _>>()?;
        Ok(Sequence { items })
    }
}

impl Matcher for Sequence {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let mut result = Value::Empty;
        for item in &self.items {
            match item.apply(cursor) {
                Outcome::Matched(value) => {
                    // Later non-empty values override earlier ones
                    if !value.is_empty() {
                        result = value;
                    }
                }
                Outcome::NoMatch => return Outcome::NoMatch,
            }
        }
        Outcome::Matched(result)
    }
}

/// Convenience function to resolve a sequence from element specifications.
pub fn sequence(items: Vec<Spec>) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Sequence::resolve(&items)?))
}
