use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::value::Value;
use regex::Regex;
use std::rc::Rc;

/// Matcher for a regular expression, anchored at the current position.
///
/// The expression is compiled once, at resolve time. Left-anchoring is
/// forced by wrapping the caller's pattern in `\A(?:...)` and matching
/// against the unconsumed remainder of the input, so the engine never
/// scans forward looking for a match. Yields the matched substring; a
/// zero-width match succeeds with empty text and no advance.
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Result<Self, SpecError> {
        let anchored = format!(r"\A(?:{})", pattern);
        let regex = Regex::new(&anchored).map_err(|source| SpecError::BadPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Pattern { regex })
    }
}

impl Matcher for Pattern {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        match self.regex.find(cursor.rest()) {
            Some(found) => {
                cursor.advance(found.end());
                Outcome::Matched(Value::Text(found.as_str().to_string()))
            }
            None => Outcome::NoMatch,
        }
    }
}

/// Convenience function to compile a pattern matcher.
pub fn pattern(pattern: &str) -> Result<MatcherRef, SpecError> {
    Ok(Rc::new(Pattern::compile(pattern)?))
}
