use crate::cursor::Cursor;
use crate::error::SpecError;
use crate::matcher::{Matcher, MatcherRef, Outcome};
use crate::spec::{resolve, Spec};
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::rc::Rc;

/// Forward reference: a placeholder rule bound to its definition after
/// construction.
///
/// Recursive and mutually recursive grammars cannot be built by eager
/// composition because the referenced rule does not exist yet. A
/// `Forward` is created unbound, handed out as a `MatcherRef` wherever the
/// rule is referenced, and bound exactly once when the definition is
/// ready. The bound specification is resolved lazily, on first use, so
/// mutually recursive rules may bind in any order.
///
/// Invoking an unbound forward reference is a programming error (the
/// grammar was not fully wired) and panics; it is not a parse failure.
/// Binding twice, or binding after first use, fails with `AlreadyBound`.
///
/// The engine has no left-recursion detection: a rule that re-enters
/// itself through a `Forward` before consuming any input will recurse
/// until the stack overflows. A spec that references its own `Forward`
/// also forms an `Rc` cycle; grammars are built once per process, so the
/// cycle's memory is simply retained.
pub struct Forward {
    pending: RefCell<Option<Spec>>,
    matcher: OnceCell<MatcherRef>,
}

impl Forward {
    pub fn new() -> Rc<Self> {
        Rc::new(Forward {
            pending: RefCell::new(None),
            matcher: OnceCell::new(),
        })
    }

    /// Bind this reference to its definition. Exactly one bind is allowed.
    pub fn bind(&self, spec: impl Into<Spec>) -> Result<(), SpecError> {
        if self.matcher.get().is_some() {
            return Err(SpecError::AlreadyBound);
        }
        let mut pending = self.pending.borrow_mut();
        if pending.is_some() {
            return Err(SpecError::AlreadyBound);
        }
        *pending = Some(spec.into());
        Ok(())
    }

    /// This reference as a specification, for embedding in rule bodies.
    pub fn spec(self: &Rc<Self>) -> Spec {
        Spec::Ready(self.clone() as MatcherRef)
    }
}

impl Matcher for Forward {
    fn apply(&self, cursor: &mut Cursor<'_>) -> Outcome {
        let matcher = self.matcher.get_or_init(|| {
            let spec = self
                .pending
                .borrow_mut()
                .take()
                .expect("forward reference used before it was bound");
            resolve(&spec)
                .expect("forward reference bound to an invalid specification")
        });
        matcher.apply(cursor)
    }
}
