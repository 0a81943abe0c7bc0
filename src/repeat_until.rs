use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Parser combinator that repeats `parser` until `terminator` matches
///
/// At every step the terminator is tried first. Yields the repeated values
/// together with the terminator's value. Fails from the starting position if
/// `parser` fails before the terminator shows up, including at the end of
/// the input.
#[derive(Clone)]
pub struct RepeatUntil<P, T> {
    parser: P,
    terminator: T,
    label: Cow<'static, str>,
}

impl<P, T> RepeatUntil<P, T> {
    pub fn new<'code>(parser: P, terminator: T) -> Self
    where
        P: Parser<'code>,
        T: Parser<'code>,
    {
        let label = format!("`{}` until `{}`", parser.label(), terminator.label()).into();
        RepeatUntil {
            parser,
            terminator,
            label,
        }
    }
}

impl<'code, P, T> Parser<'code> for RepeatUntil<P, T>
where
    P: Parser<'code>,
    T: Parser<'code>,
{
    type Output = (Vec<P::Output>, T::Output);

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::new();
        let mut current = cursor;

        loop {
            let missing = match self.terminator.parse(current) {
                Ok((end, next)) => return Ok(((values, end), next)),
                Err(error) => error,
            };

            match self.parser.parse(current) {
                Ok((_, next)) if next.position() == current.position() => {
                    // The terminator failed here already and will again
                    log::debug!(
                        "{}: `{}` matched nothing at {}, giving up",
                        self.label,
                        self.parser.label(),
                        current.position()
                    );
                    return Err(ParseError::composite(self.label.clone(), &cursor, missing));
                }
                Ok((value, next)) => {
                    values.push(value);
                    current = next;
                }
                Err(error) => {
                    return Err(ParseError::composite(self.label.clone(), &cursor, error));
                }
            }
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a RepeatUntil parser
pub fn repeat_until<'code, P, T>(parser: P, terminator: T) -> RepeatUntil<P, T>
where
    P: Parser<'code>,
    T: Parser<'code>,
{
    RepeatUntil::new(parser, terminator)
}

/// Extension trait to add .repeat_until() method support for parsers
pub trait RepeatUntilExt<'code>: Parser<'code> + Sized {
    fn repeat_until<T>(self, terminator: T) -> RepeatUntil<Self, T>
    where
        T: Parser<'code>,
    {
        RepeatUntil::new(self, terminator)
    }
}

impl<'code, P> RepeatUntilExt<'code> for P where P: Parser<'code> {}
