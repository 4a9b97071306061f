use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::literal::Literal;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Ordered alternation with a commit ("cut") protocol.
///
/// Options are tried in order from the same starting position. An
/// uncommitted failure rewinds the cursor and moves on to the next option;
/// the first success wins and later options are never tried.
///
/// Each alternation is its own commit scope: the inherited commit flag is
/// saved and cleared on entry and restored on every exit, so a `cut`
/// inside never leaks into an enclosing alternation. When an option sets
/// the flag and then fails, the whole alternation fails immediately —
/// remaining options are foreclosed and the cursor is deliberately not
/// rewound (that is the wrapping combinator's decision, as for any other
/// failure).
///
/// Unlike the resolver, alternation treats a bare text option as a
/// text-yielding literal: `options(["true", "false"])` yields the keyword
/// that matched.
pub struct Options {
    options: Vec<MatcherRef>,
}

impl Options {
    /// Resolve an ordered, non-empty list of option specifications.
    pub fn resolve(options: &[Spec]) -> Result<Self, SpecError> {
        if options.is_empty() {
            return Err(SpecError::EmptyOptions);
        }
        let options = options
            .iter()
            .map(|spec| match spec {
                Spec::Text(text) => {
                    Ok(Rc::new(Literal::new(text.clone())) as MatcherRef)
                }
                other => resolve(other),
            })
            .collect::<Result<_, _>>()?;
        Ok(Options { options })
    }
}

impl Matcher for Options {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let start = cursor.position();
        let inherited = cursor.take_commit();
        for option in &self.options {
            match option.apply(cursor) {
                Outcome::Matched(value) => {
                    cursor.set_commit(inherited);
                    return Outcome::Matched(value);
                }
                Outcome::NoMatch => {
                    if cursor.committed() {
                        // A cut ran inside the failed option: foreclose
                        // the remaining options and keep the position
                        cursor.set_commit(inherited);
                        return Outcome::NoMatch;
                    }
                    cursor.set_position(start);
                }
            }
        }
        cursor.set_commit(inherited);
        Outcome::NoMatch
    }
}

/// Convenience function to resolve an alternation from option
/// specifications.
pub fn options(items: Vec<Spec>) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Options::resolve(&items)?))
}

/// The commit signal.
///
/// Matches nothing and consumes nothing; it sets the enclosing
/// alternation's commit flag and succeeds. Placed after the
/// distinguishing prefix of an option, it declares "once this much has
/// matched, do not backtrack into sibling options", which keeps grammars
/// with ambiguous prefixes from silently wandering into unrelated
/// alternatives.
pub struct Cut;

impl Matcher for Cut {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        cursor.set_commit(true);
        Outcome::Matched(Value::Empty)
    }
}

/// Convenience function for the commit-signal matcher.
pub fn cut() -> MatcherRef {
    Rc::new(Cut)
}
