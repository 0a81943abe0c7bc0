use crate::ParseError;
use crate::TextCursor;
use std::borrow::Cow;

/// Outcome of running a parser: the value and the advanced cursor, or an error
pub type ParseResult<'code, T> = Result<(T, TextCursor<'code>), ParseError<'code>>;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value: building a grammar composes parsers
/// without running anything, and running one never mutates the cursor it is
/// given. On success the returned cursor is at or after the input cursor.
/// On failure no cursor is returned at all, so the caller's own copy is the
/// backtracking point.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Human-readable name of what this parser recognizes, used in errors
    fn label(&self) -> &str;

    /// Run this parser against a fresh cursor over `input`
    ///
    /// ```
    /// use textcomb::prelude::*;
    ///
    /// let (pair, rest) = is_char('a').and(is_char('c')).run("ac").unwrap();
    /// assert_eq!(pair, ('a', 'c'));
    /// assert!(rest.eos());
    /// ```
    fn run(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(TextCursor::new(input))
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

/// A parser with its concrete type erased
///
/// Used to put parsers of different types into one `either` or `chain` list.
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// A parser reported under a different label
///
/// Runs exactly like the wrapped parser; its own failures are relabeled.
#[derive(Clone)]
pub struct Named<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, label: Cow<'static, str>) -> Self {
        Named { parser, label }
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|error| error.relabel(self.label.clone()))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn named(self, label: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, label.into())
    }
}

impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Named parser
pub fn named<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Named<P>
where
    P: Parser<'code>,
{
    Named::new(parser, label.into())
}
