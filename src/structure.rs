use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use crate::value::Value;
use std::rc::Rc;

/// Field names that mark "parse but discard from the result".
///
/// A structure may use each more than once; they exist so punctuation and
/// whitespace can participate in matching without appearing in the record.
const DISCARD_NAMES: [&str; 5] = ["_", "__", "___", "____", "_____"];

fn is_discard(name: &str) -> bool {
    DISCARD_NAMES.contains(&name)
}

/// Named-field composition: run each field's matcher in declaration order
/// against the same cursor.
///
/// Fails like a sequence (first failing field, no rewind). On success
/// yields a record with one entry per non-discarded field, in declaration
/// order. Discarded fields are matched for their side effects only.
pub struct Structure {
    fields: Vec<(String, MatcherRef)>,
}

impl Structure {
    /// Resolve a field map. An empty map is an invalid specification.
    pub fn resolve(fields: &[(String, Spec)]) -> Result<Self, SpecError> {
        if fields.is_empty() {
            return Err(SpecError::EmptySequence);
        }
        let fields = fields
            .iter()
            .map(|(name, spec)| Ok((name.clone(), resolve(spec)?)))
            .collect::<Result<_, SpecError>>()?;
        Ok(Structure { fields })
    }
}

impl Matcher for Structure {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let mut record = Vec::new();
        for (name, matcher) in &self.fields {
            match matcher.apply(cursor) {
                Outcome::Matched(value) => {
                    if !is_discard(name) {
                        record.push((name.clone(), value));
                    }
                }
                Outcome::NoMatch => return Outcome::NoMatch,
            }
        }
        Outcome::Matched(Value::Record(record))
    }
}

/// Convenience function to resolve a structure from `(name, spec)` pairs.
pub fn structure<N>(fields: Vec<(N, Spec)>) -> Result<MatcherRef, SpecError>
where
    N: Into<String>,
{
    let fields: Vec<(String, Spec)> = fields
        .into_iter()
        .map(|(name, spec)| (name.into(), spec))
        .collect();
    Ok(Rc::new(Structure::resolve(&fields)?))
}
