use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Parser that matches content between opening and closing delimiters
///
/// Returns only the content's value. The whole match is atomic.
#[derive(Clone)]
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
    label: Cow<'static, str>,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new<'code>(open: P1, content: P2, close: P3) -> Self
    where
        P1: Parser<'code>,
        P2: Parser<'code>,
        P3: Parser<'code>,
    {
        let label = format!(
            "`{}` between `{}` and `{}`",
            content.label(),
            open.label(),
            close.label()
        )
        .into();
        Between {
            open,
            content,
            close,
            label,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let wrap = |error: ParseError<'code>| ParseError::composite(self.label.clone(), &cursor, error);

        let (_, next) = self.open.parse(cursor).map_err(wrap)?;
        let (content, next) = self.content.parse(next).map_err(wrap)?;
        let (_, next) = self.close.parse(next).map_err(wrap)?;
        Ok((content, next))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Creates a parser that matches content between delimiters
///
/// # Example
/// ```
/// use textcomb::prelude::*;
///
/// let digit = satisfy(|c| c.is_ascii_digit(), "Digit");
/// let (digits, _) = between(is_char('['), many(digit), is_char(']'))
///     .run("[42]")
///     .unwrap();
/// assert_eq!(digits, vec!['4', '2']);
/// ```
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}
