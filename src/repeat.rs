use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Repetition with an optional separator.
///
/// The first element is mandatory: if it fails, the repetition fails.
/// After that, each iteration records the position, attempts separator
/// then element, and either appends the element's non-empty value or
/// rewinds to the recorded position and stops — iteration failures are
/// absorbed, never propagated. A trailing separator with no element after
/// it is rewound along with the iteration that tried it.
///
/// Progress guard: an iteration that consumes no input ends the loop, so
/// a zero-width element (with no consuming separator) cannot loop forever.
///
/// Yields the ordered list of collected non-empty values.
pub struct Repeat {
    element: MatcherRef,
    separator: Option<MatcherRef>,
    limit: Option<usize>,
}

impl Repeat {
    pub fn new(element: MatcherRef, separator: Option<MatcherRef>) -> Self {
        Repeat {
            element,
            separator,
            limit: None,
        }
    }

    /// Cap the number of loop iterations after the first element. The cap
    /// is purely a loop limit; shorter inputs are not an error.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Matcher for Repeat {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let mut items = Vec::new();

        // First element is unconditional; its failure is the repetition's
        match self.element.apply(cursor) {
            Outcome::Matched(value) => {
                if !value.is_empty() {
                    items.push(value);
                }
            }
            Outcome::NoMatch => return Outcome::NoMatch,
        }

        let mut iterations = 0;
        loop {
            if let Some(limit) = self.limit {
                if iterations >= limit {
                    break;
                }
            }
            let mark = cursor.position();

            if let Some(separator) = &self.separator {
                if let Outcome::NoMatch = separator.apply(cursor) {
                    cursor.set_position(mark);
                    break;
                }
            }

            match self.element.apply(cursor) {
                Outcome::Matched(value) => {
                    if !value.is_empty() {
                        items.push(value);
                    }
                    // Progress guard: a zero-width iteration ends the loop
                    if cursor.position() == mark {
                        break;
                    }
                }
                Outcome::NoMatch => {
                    cursor.set_position(mark);
                    break;
                }
            }
            iterations += 1;
        }

        Outcome::Matched(Value::List(items))
    }
}

/// Convenience function: one or more elements, no separator.
pub fn repeat(element: impl Into<Spec>) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Repeat::new(resolve(&element.into())?, None)))
}

/// Convenience function: one or more elements with a separator between.
pub fn separated(
    element: impl Into<Spec>,
    separator: impl Into<Spec>,
) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Repeat::new(
        resolve(&element.into())?,
        Some(resolve(&separator.into())?),
    )))
}
