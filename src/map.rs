use crate::TextCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The label and any failure of the wrapped parser pass through unchanged.
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }

    fn label(&self) -> &str {
        self.parser.label()
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Parser that requires a match but throws its value away
///
/// A miss is still an error; see [`skip`](crate::optional::skip) for the
/// variant that never fails.
#[derive(Clone)]
pub struct Ignore<P> {
    parser: P,
}

impl<P> Ignore<P> {
    pub fn new(parser: P) -> Self {
        Ignore { parser }
    }
}

impl<'code, P> Parser<'code> for Ignore<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }

    fn label(&self) -> &str {
        self.parser.label()
    }
}

/// Convenience function to create an Ignore parser
pub fn ignore<'code, P>(parser: P) -> Ignore<P>
where
    P: Parser<'code>,
{
    Ignore { parser }
}

/// Extension trait to add .map() and .ignore() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn ignore(self) -> Ignore<Self> {
        Ignore { parser: self }
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
