use thiserror::Error;

/// Construction-time errors: an invalid specification, caught while the
/// grammar is being wired up, before any parse runs.
///
/// This class is deliberately separate from the parse-failure signal
/// (`Outcome::NoMatch`). A bad grammar is a programming error and is
/// reported immediately; it is never absorbed by backtracking.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("sequence specification must contain at least one element")]
    EmptySequence,

    #[error("alternation specification must contain at least one option")]
    EmptyOptions,

    #[error("invalid pattern {pattern:?}: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("forward reference is already bound")]
    AlreadyBound,
}
