use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Outcome of greedily applying one parser as often as possible
pub(crate) struct Run<'code, T> {
    pub values: Vec<T>,
    pub cursor: TextCursor<'code>,
    /// The failure that ended the run, absent when a zero-width match ended it
    pub stopped_by: Option<ParseError<'code>>,
}

/// Apply `parser` from `cursor` until it fails or matches without consuming
/// anything
///
/// A zero-width match is kept once and ends the run.
pub(crate) fn run_greedy<'code, P>(
    parser: &P,
    label: &str,
    cursor: TextCursor<'code>,
) -> Run<'code, P::Output>
where
    P: Parser<'code>,
{
    let mut values = Vec::new();
    let mut cursor = cursor;

    loop {
        match parser.parse(cursor) {
            Ok((value, next)) => {
                values.push(value);
                if next.position() == cursor.position() {
                    log::debug!(
                        "{}: `{}` matched nothing at {}, stopping repetition",
                        label,
                        parser.label(),
                        cursor.position()
                    );
                    return Run {
                        values,
                        cursor: next,
                        stopped_by: None,
                    };
                }
                cursor = next;
            }
            Err(error) => {
                return Run {
                    values,
                    cursor,
                    stopped_by: Some(error),
                };
            }
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds. A sub-parser that succeeds without consuming input is
/// accepted once, then the repetition stops.
#[derive(Clone)]
pub struct Many<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Many<P> {
    pub fn new<'code>(parser: P) -> Self
    where
        P: Parser<'code>,
    {
        let label = format!("Many `{}`", parser.label()).into();
        Many { parser, label }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let run = run_greedy(&self.parser, &self.label, cursor);
        Ok((run.values, run.cursor))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
