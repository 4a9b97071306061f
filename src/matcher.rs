use crate::cursor::Cursor;
use crate::value::Value;
use std::rc::Rc;

/// Outcome of running a matcher against a cursor.
///
/// `NoMatch` is the bare, payload-free failure signal. It carries no
/// position and no message; alternation, repetition and `not` are the only
/// combinators that absorb it, everything else propagates it unchanged.
/// `Matched(Value::Empty)` is a success that yielded nothing and must never
/// be confused with `NoMatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matched(Value),
    NoMatch,
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }

    /// The matched value, or `None` on no-match.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Matched(value) => Some(value),
            Outcome::NoMatch => None,
        }
    }
}

/// Core matcher trait for the engine.
///
/// A matcher attempts to consume input at the cursor's current position.
/// On success it advances the cursor past what it consumed and yields a
/// value; on failure it returns `NoMatch`. A failing matcher is not
/// required to rewind the cursor — restoring the position is the
/// responsibility of whichever alternation or repetition wraps it.
///
/// Matchers hold no parse state of their own (everything lives in the
/// cursor), so they can be re-entered at different positions and invoked
/// recursively.
pub trait Matcher {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome;
}

/// Shared handle to a resolved matcher.
///
/// Matchers are type-erased and reference-counted because specifications
/// are dispatched on at runtime and recursive grammars alias their rules.
pub type MatcherRef = Rc<dyn Matcher>;
