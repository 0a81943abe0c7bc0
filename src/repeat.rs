use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Parser combinator that matches the given parser exactly `count` times
///
/// Atomic like [`chain`](crate::and::chain): if any repetition fails, no
/// partial sequence is returned and the error points at the start.
#[derive(Clone)]
pub struct Repeat<P> {
    parser: P,
    count: usize,
    label: Cow<'static, str>,
}

impl<P> Repeat<P> {
    pub fn new<'code>(parser: P, count: usize) -> Self
    where
        P: Parser<'code>,
    {
        let label = format!("Exactly {} `{}`", count, parser.label()).into();
        Repeat {
            parser,
            count,
            label,
        }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.count);
        let mut current = cursor;

        for _ in 0..self.count {
            let (value, next) = self
                .parser
                .parse(current)
                .map_err(|error| ParseError::composite(self.label.clone(), &cursor, error))?;
            values.push(value);
            current = next;
        }

        Ok((values, current))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(parser: P, count: usize) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, count)
}

/// Extension trait to add .repeat() method support for parsers
pub trait RepeatExt<'code>: Parser<'code> + Sized {
    fn repeat(self, count: usize) -> Repeat<Self> {
        Repeat::new(self, count)
    }
}

impl<'code, P> RepeatExt<'code> for P where P: Parser<'code> {}
