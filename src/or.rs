use crate::parser::{ParseResult, Parser};
use crate::{CodeLoc, ErrorKind, ParseError, TextCursor};
use std::borrow::Cow;

fn no_alternative<'code>(label: &Cow<'static, str>, cursor: &TextCursor<'code>) -> ParseError<'code> {
    ParseError::new(ErrorKind::NoAlternative, label.clone(), None, CodeLoc::at(cursor))
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The first parser to succeed wins. When both fail, the branch errors are
/// dropped and a single error labeled "Either `a` or `b`" is reported at
/// the starting position; name the branches with
/// [`named`](crate::NamedExt::named) to make that message useful.
#[derive(Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
    label: Cow<'static, str>,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new<'code>(parser1: P1, parser2: P2) -> Self
    where
        P1: Parser<'code>,
        P2: Parser<'code>,
    {
        let label = format!("Either `{}` or `{}`", parser1.label(), parser2.label()).into();
        Or {
            parser1,
            parser2,
            label,
        }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self
                .parser2
                .parse(cursor)
                .map_err(|_| no_alternative(&self.label, &cursor)),
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of parsers of the same type
///
/// Behaves like a left-to-right fold of [`Or`]: the first listed parser that
/// succeeds wins.
#[derive(Clone)]
pub struct Choice<P> {
    parsers: Vec<P>,
    label: Cow<'static, str>,
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parsers
            .iter()
            .find_map(|parser| parser.parse(cursor).ok())
            .ok_or_else(|| no_alternative(&self.label, &cursor))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a Choice parser
///
/// Parsers of different types can be combined after [`boxed`](crate::BoxedExt::boxed).
pub fn either<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    let parsers: Vec<P> = parsers.into_iter().collect();
    let alternatives = parsers
        .iter()
        .map(|parser| format!("`{}`", parser.label()))
        .collect::<Vec<_>>()
        .join(" or ");
    Choice {
        parsers,
        label: format!("Either {}", alternatives).into(),
    }
}
