/// Mutable parse state threaded through one top-level parse.
///
/// A single cursor is created per input and passed as `&mut` through the
/// whole recursive call tree. All backtracking is snapshot-and-restore on
/// `position` (and, inside alternation, the `commit` flag); there is no
/// other undo mechanism.
///
/// `position` is a byte offset into `text` and always sits on a character
/// boundary: matchers only advance by the length of something they matched.
#[derive(Debug)]
pub struct Cursor<'text> {
    text: &'text str,
    position: usize,
    commit: bool,
}

impl<'text> Cursor<'text> {
    pub fn new(text: &'text str) -> Self {
        Cursor {
            text,
            position: 0,
            commit: false,
        }
    }

    /// Start a cursor mid-input. `position` must lie on a char boundary.
    pub fn at(text: &'text str, position: usize) -> Self {
        assert!(
            text.is_char_boundary(position),
            "cursor position {} is not a character boundary",
            position
        );
        Cursor {
            text,
            position,
            commit: false,
        }
    }

    pub fn text(&self) -> &'text str {
        self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewind (or replay) to a previously recorded position.
    pub fn set_position(&mut self, position: usize) {
        debug_assert!(self.text.is_char_boundary(position));
        self.position = position;
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'text str {
        &self.text[self.position..]
    }

    pub fn at_end(&self) -> bool {
        self.position == self.text.len()
    }

    /// The next unconsumed character, if any.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance by `len` bytes of matched input.
    pub fn advance(&mut self, len: usize) {
        debug_assert!(self.position + len <= self.text.len());
        self.position += len;
        debug_assert!(self.text.is_char_boundary(self.position));
    }

    pub fn committed(&self) -> bool {
        self.commit
    }

    pub fn set_commit(&mut self, commit: bool) {
        self.commit = commit;
    }

    /// Clear the commit flag, returning the previous value. Alternation
    /// calls this on entry so each alternation is a fresh commit scope.
    pub fn take_commit(&mut self) -> bool {
        std::mem::replace(&mut self.commit, false)
    }
}
