use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::TextCursor;
use std::fmt;

/// A location in the input
///
/// Positions compare by byte offset. Line and column are 1-based, columns
/// count characters rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset into the source
    pub offset: usize,
    /// Line number, starting at 1
    pub line: usize,
    /// Column within the line, starting at 1
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input
    pub const fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The position reached after walking over `text` from this position
    pub fn advanced_over(self, text: &str) -> Self {
        text.chars().fold(self, |position, ch| position.advanced_by(ch))
    }

    /// The position right after `ch`, assuming `ch` sits at this position
    pub fn advanced_by(self, ch: char) -> Self {
        if ch == '\n' {
            Position {
                offset: self.offset + ch.len_utf8(),
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source code
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl<'code> Span<'code> {
    /// Create a new span
    pub fn new(source: &'code str, start: Position, end: Position) -> Self {
        Span { source, start, end }
    }

    /// Length of the span in bytes, zero when `end` precedes `start`
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slice of source text covered by this span
    pub fn as_str(&self) -> &'code str {
        self.source
            .get(self.start.offset..self.end.offset)
            .unwrap_or_default()
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A parser combinator that captures the span of a successful parse
#[derive(Clone)]
pub struct WithSpan<P> {
    parser: P,
}

impl<P> WithSpan<P> {
    pub fn new(parser: P) -> Self {
        WithSpan { parser }
    }
}

impl<'code, P> Parser<'code> for WithSpan<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.position();
        let (output, next) = self.parser.parse(cursor)?;
        let span = Span::new(cursor.source(), start, next.position());
        Ok(((output, span), next))
    }

    fn label(&self) -> &str {
        self.parser.label()
    }
}

/// Extension trait to add span capture to any parser
pub trait WithSpanExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture the span it consumed
    fn with_span(self) -> WithSpan<Self> {
        WithSpan::new(self)
    }
}

impl<'code, P> WithSpanExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a WithSpan combinator
pub fn with_span<P>(parser: P) -> WithSpan<P> {
    WithSpan::new(parser)
}
