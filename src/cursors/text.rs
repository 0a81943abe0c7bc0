use crate::cursor::Cursor;
use crate::position::Position;

/// A cursor over UTF-8 text that tracks line and column as it advances
///
/// Copying a `TextCursor` is the snapshot operation: the copy shares the
/// immutable source and owns its position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'code> {
    source: &'code str,
    position: Position,
}

impl<'code> TextCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        TextCursor {
            source,
            position: Position::start(),
        }
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'code str {
        self.source.get(self.position.offset..).unwrap_or_default()
    }
}

impl<'code> Cursor<'code> for TextCursor<'code> {
    fn value(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn next(self) -> Self {
        match self.value() {
            Some(ch) => TextCursor {
                source: self.source,
                position: self.position.advanced_by(ch),
            },
            None => self,
        }
    }

    fn position(&self) -> Position {
        self.position
    }

    fn source(&self) -> &'code str {
        self.source
    }

    fn seek(&self, needle: &str) -> Option<Position> {
        let rest = self.remaining();
        let found = rest.find(needle)?;
        Some(self.position.advanced_over(&rest[..found]))
    }

    fn relocate(self, position: Position) -> Self {
        TextCursor {
            source: self.source,
            position,
        }
    }
}
