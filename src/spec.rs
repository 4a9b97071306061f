use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::literal::Punct;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::pattern::Pattern;
use crate::sequence::Sequence;
use crate::structure::Structure;
use crate::value::Value;
use std::rc::Rc;

/// A declarative specification of what to match.
///
/// Specifications are plain data; `resolve` turns one into an executable
/// matcher. The shapes:
///
/// - `Nothing`: always succeeds, consumes nothing, yields `Empty`.
/// - `Text`: exact, case-sensitive match at the current position. Resolves
///   to punctuation (matched text discarded); use the `literal` matcher
///   when the text itself should be the value. Alternation treats bare
///   text specially, see `options`.
/// - `Pattern`: regular expression, force-anchored at the current position.
///   Yields the matched substring.
/// - `List`: ordered sequence of sub-specifications.
/// - `Map`: named-field structure; field names `_` through `_____` are
///   parsed but excluded from the result record.
/// - `Ready`: an already-built matcher, used as-is.
#[derive(Clone)]
pub enum Spec {
    Nothing,
    Text(String),
    Pattern(String),
    List(Vec<Spec>),
    Map(Vec<(String, Spec)>),
    Ready(MatcherRef),
}

impl Spec {
    /// Pattern specification. `pattern(...)` resolves and validates the
    /// expression immediately; this form defers both to `resolve`.
    pub fn pattern(pattern: impl Into<String>) -> Spec {
        Spec::Pattern(pattern.into())
    }

    /// Field-map specification from `(name, spec)` pairs.
    pub fn map<N>(fields: Vec<(N, Spec)>) -> Spec
    where
        N: Into<String>,
    {
        Spec::Map(
            fields
                .into_iter()
                .map(|(name, spec)| (name.into(), spec))
                .collect(),
        )
    }
}

impl From<&str> for Spec {
    fn from(text: &str) -> Self {
        Spec::Text(text.to_string())
    }
}

impl From<String> for Spec {
    fn from(text: String) -> Self {
        Spec::Text(text)
    }
}

impl From<Vec<Spec>> for Spec {
    fn from(items: Vec<Spec>) -> Self {
        Spec::List(items)
    }
}

impl From<MatcherRef> for Spec {
    fn from(matcher: MatcherRef) -> Self {
        Spec::Ready(matcher)
    }
}

/// Resolve a specification into an executable matcher.
///
/// This is the engine's single entry point: build a `Spec` tree, resolve
/// it once, then run the returned matcher against any number of cursors.
/// Resolution has no observable side effects until the matcher is invoked,
/// and resolving an already-resolved matcher is the identity.
pub fn resolve(spec: &Spec) -> Result<MatcherRef, SpecError> {
    match spec {
        Spec::Nothing => Ok(Rc::new(Nothing)),
        Spec::Text(text) => Ok(Rc::new(Punct::new(text.clone()))),
        Spec::Pattern(pattern) => Ok(Rc::new(Pattern::compile(pattern)?)),
        Spec::List(items) => Ok(Rc::new(Sequence::resolve(items)?)),
        Spec::Map(fields) => Ok(Rc::new(Structure::resolve(fields)?)),
        Spec::Ready(matcher) => Ok(matcher.clone()),
    }
}

/// Matcher for the absent specification: succeed, consume nothing, yield
/// nothing.
pub struct Nothing;

impl Matcher for Nothing {
    fn apply(&self, _cursor: &mut Cursor<'_>) -> Outcome {
        Outcome::Matched(Value::Empty)
    }
}

/// Convenience function for the always-succeeding empty matcher.
pub fn nothing() -> MatcherRef {
    Rc::new(Nothing)
}
