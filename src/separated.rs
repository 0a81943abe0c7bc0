use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Parser that matches two values separated by a parser
///
/// This combinator parses: `left + separator + right`
/// and returns a tuple `(left_value, right_value)` with the separator discarded.
#[derive(Clone)]
pub struct SeparatedPair<P1, PS, P2> {
    left: P1,
    separator: PS,
    right: P2,
    label: Cow<'static, str>,
}

impl<P1, PS, P2> SeparatedPair<P1, PS, P2> {
    pub fn new<'code>(left: P1, separator: PS, right: P2) -> Self
    where
        P1: Parser<'code>,
        PS: Parser<'code>,
        P2: Parser<'code>,
    {
        let label = format!(
            "`{}` and `{}` separated by `{}`",
            left.label(),
            right.label(),
            separator.label()
        )
        .into();
        SeparatedPair {
            left,
            separator,
            right,
            label,
        }
    }
}

impl<'code, P1, PS, P2> Parser<'code> for SeparatedPair<P1, PS, P2>
where
    P1: Parser<'code>,
    PS: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let wrap = |error: ParseError<'code>| ParseError::composite(self.label.clone(), &cursor, error);

        let (left, next) = self.left.parse(cursor).map_err(wrap)?;
        let (_, next) = self.separator.parse(next).map_err(wrap)?;
        let (right, next) = self.right.parse(next).map_err(wrap)?;
        Ok(((left, right), next))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a SeparatedPair parser
pub fn separated_pair<'code, P1, PS, P2>(
    left: P1,
    separator: PS,
    right: P2,
) -> SeparatedPair<P1, PS, P2>
where
    P1: Parser<'code>,
    PS: Parser<'code>,
    P2: Parser<'code>,
{
    SeparatedPair::new(left, separator, right)
}

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses at least one item, followed by zero or more occurrences of
/// (separator + item), and returns every item in order.
///
/// # Examples
/// - `"a,b,c"` with separator `,` gives `vec!['a', 'b', 'c']`
///
/// # Note
/// - Requires at least one element
/// - A trailing separator fails the whole list
/// - Whitespace is not skipped
#[derive(Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    label: Cow<'static, str>,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new<'code>(parser: P, separator: PS) -> Self
    where
        P: Parser<'code>,
        PS: Parser<'code>,
    {
        let label = format!(
            "`{}` separated by `{}`",
            parser.label(),
            separator.label()
        )
        .into();
        SeparatedList {
            parser,
            separator,
            label,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let wrap = |error: ParseError<'code>| ParseError::composite(self.label.clone(), &cursor, error);

        let (first, mut current) = self.parser.parse(cursor).map_err(wrap)?;
        let mut results = vec![first];

        loop {
            let after_separator = match self.separator.parse(current) {
                Ok((_, next)) => next,
                Err(_) => break,
            };

            // An item is required after every separator
            let (value, next) = self.parser.parse(after_separator).map_err(wrap)?;
            results.push(value);

            if next.position() == current.position() {
                log::debug!(
                    "{}: matched nothing at {}, stopping repetition",
                    self.label,
                    current.position()
                );
                break;
            }
            current = next;
        }

        Ok((results, current))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
