use crate::TextCursor;
use crate::and::And;
use crate::parser::{ParseResult, Parser};

/// Sequence of two parsers that keeps only the left value
///
/// Both sides must match; failures are those of [`And`].
#[derive(Clone)]
pub struct KeepLeft<P1, P2> {
    inner: And<P1, P2>,
}

impl<'code, P1, P2> Parser<'code> for KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let ((left, _), cursor) = self.inner.parse(cursor)?;
        Ok((left, cursor))
    }

    fn label(&self) -> &str {
        self.inner.label()
    }
}

/// Sequence of two parsers that keeps only the right value
#[derive(Clone)]
pub struct KeepRight<P1, P2> {
    inner: And<P1, P2>,
}

impl<'code, P1, P2> Parser<'code> for KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let ((_, right), cursor) = self.inner.parse(cursor)?;
        Ok((right, cursor))
    }

    fn label(&self) -> &str {
        self.inner.label()
    }
}

/// Convenience function to create a KeepLeft parser
pub fn keep_left<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    KeepLeft {
        inner: And::new(parser1, parser2),
    }
}

/// Convenience function to create a KeepRight parser
pub fn keep_right<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    KeepRight {
        inner: And::new(parser1, parser2),
    }
}

/// Extension trait to add .keep_left() and .keep_right() method support for parsers
pub trait KeepExt<'code>: Parser<'code> + Sized {
    /// Match `self` then `other`, yield the value of `self`
    fn keep_left<P>(self, other: P) -> KeepLeft<Self, P>
    where
        P: Parser<'code>,
    {
        keep_left(self, other)
    }

    /// Match `self` then `other`, yield the value of `other`
    fn keep_right<P>(self, other: P) -> KeepRight<Self, P>
    where
        P: Parser<'code>,
    {
        keep_right(self, other)
    }
}

impl<'code, P> KeepExt<'code> for P where P: Parser<'code> {}
