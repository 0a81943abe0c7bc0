use crate::position::Position;

/// Cursor trait consumed by the parser combinators
///
/// A cursor is a position-tracked view over a character sequence. Cursors are
/// `Copy`: every combinator that might fail works on its own snapshot and only
/// threads forward the copy obtained from a successful sub-step, so a failed
/// attempt can never leak partial advancement to its caller.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// Get the character at the current cursor position
    ///
    /// Returns `None` if the cursor is positioned at the end of the input
    fn value(&self) -> Option<char>;

    /// Advance the cursor to the next character
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the input
    fn position(&self) -> Position;

    /// Check if the cursor is at the end of the input
    fn eos(&self) -> bool {
        self.value().is_none()
    }

    /// Get the full source text the cursor walks over
    fn source(&self) -> &'code str;

    /// Find the first occurrence of `needle` at or after the current position
    fn seek(&self, needle: &str) -> Option<Position>;

    /// Move the cursor to an absolute position previously obtained from a
    /// cursor over the same source
    fn relocate(self, position: Position) -> Self;

    /// Advance past `lines` line breaks, then `columns` characters, without
    /// inspecting the content. Stops at the end of the input.
    fn step_over(self, lines: usize, columns: usize) -> Self {
        let mut cursor = self;
        let mut remaining = lines;
        while remaining > 0 {
            match cursor.value() {
                Some('\n') => remaining -= 1,
                Some(_) => {}
                None => return cursor,
            }
            cursor = cursor.next();
        }
        for _ in 0..columns {
            if cursor.eos() {
                break;
            }
            cursor = cursor.next();
        }
        cursor
    }
}
