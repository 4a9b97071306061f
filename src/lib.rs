//! # Specomb - Declarative Parser Combinators
//!
//! A small engine that turns declarative specifications — text literals,
//! patterns, ordered lists, and named-field maps — into executable
//! recursive-descent matchers over a text cursor.
//!
//! The engine emphasizes:
//!
//! - **Backtracking you can reason about**: alternation and repetition
//!   snapshot and restore the cursor; every other failure propagates as a
//!   bare no-match signal.
//! - **Commit ("cut")**: an alternative can declare that, past a certain
//!   prefix, sibling alternatives must not be retried.
//! - **Recursive grammars**: forward references bind a rule to its
//!   definition after construction, so rules can refer to themselves and
//!   to each other.
//! - **Scannerless matching**: no tokenizer; matchers consume the input
//!   text directly, patterns are always anchored at the current position.
//!
//! ```
//! use specomb::{capture, convert, resolve, Cursor, Matcher, Outcome, Spec, Value};
//!
//! let digits = convert(
//!     Spec::Ready(capture(Spec::pattern(r"\d+")).unwrap()),
//!     |v| Value::Number(v.as_text().unwrap().parse().unwrap()),
//! )
//! .unwrap();
//! let paren = resolve(&Spec::List(vec![
//!     "(".into(),
//!     Spec::Ready(digits),
//!     ")".into(),
//! ]))
//! .unwrap();
//!
//! let mut cursor = Cursor::new("(123)");
//! assert_eq!(paren.apply(&mut cursor), Outcome::Matched(Value::Number(123.0)));
//! assert_eq!(cursor.position(), 5);
//! ```

pub mod capture;
pub mod class;
pub mod convert;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod forward;
pub mod ignore;
pub mod literal;
pub mod matcher;
pub mod maybe;
pub mod not;
pub mod options;
pub mod pattern;
pub mod repeat;
pub mod sequence;
pub mod spec;
pub mod structure;
pub mod value;

pub use capture::capture;
pub use class::{char_range, one_of};
pub use convert::convert;
pub use cursor::Cursor;
pub use eof::eof;
pub use error::SpecError;
pub use forward::Forward;
pub use ignore::ignore;
pub use literal::{literal, punct};
pub use matcher::{Matcher, MatcherRef, Outcome};
pub use maybe::maybe;
pub use not::not;
pub use options::{cut, options};
pub use pattern::pattern;
pub use repeat::{repeat, separated, Repeat};
pub use sequence::sequence;
pub use spec::{nothing, resolve, Spec};
pub use structure::structure;
pub use value::Value;
