use crate::parser::{ParseResult, Parser};
use crate::{CodeLoc, ErrorKind, ParseError, TextCursor};
use std::borrow::Cow;

/// Parser combinator that matches the given parser up to `maximum` times
///
/// Finding one more match than allowed is an error, not a truncation: the
/// parser fails at its starting position when a further match follows the
/// `maximum`th one.
#[derive(Clone)]
pub struct AtMost<P> {
    parser: P,
    maximum: usize,
    label: Cow<'static, str>,
}

impl<P> AtMost<P> {
    pub fn new<'code>(parser: P, maximum: usize) -> Self
    where
        P: Parser<'code>,
    {
        let label = format!("At most {} `{}`", maximum, parser.label()).into();
        AtMost {
            parser,
            maximum,
            label,
        }
    }
}

impl<'code, P> Parser<'code> for AtMost<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        // Bounded by `maximum`, so zero-width matches are collected like any other
        let mut values = Vec::with_capacity(self.maximum);
        let mut current = cursor;
        while values.len() < self.maximum {
            match self.parser.parse(current) {
                Ok((value, next)) => {
                    values.push(value);
                    current = next;
                }
                Err(_) => return Ok((values, current)),
            }
        }

        if self.parser.parse(current).is_ok() {
            let reason = format!(
                "found {} matches, only expected {}",
                self.maximum + 1,
                self.maximum
            );
            return Err(ParseError::new(
                ErrorKind::TooMany,
                self.label.clone(),
                Some(reason.into()),
                CodeLoc::at(&cursor),
            ));
        }

        Ok((values, current))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create an AtMost parser
pub fn at_most<'code, P>(parser: P, maximum: usize) -> AtMost<P>
where
    P: Parser<'code>,
{
    AtMost::new(parser, maximum)
}

/// Extension trait to add .at_most() method support for parsers
pub trait AtMostExt<'code>: Parser<'code> + Sized {
    fn at_most(self, maximum: usize) -> AtMost<Self> {
        AtMost::new(self, maximum)
    }
}

impl<'code, P> AtMostExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::cursor::Cursor;

    #[test]
    fn test_at_most_fewer_than_maximum() {
        let cursor = TextCursor::new("aab");
        let (values, cursor) = at_most(is_char('a'), 3).parse(cursor).unwrap();
        assert_eq!(values, vec!['a', 'a']);
        assert_eq!(cursor.value(), Some('b'));
    }

    #[test]
    fn test_at_most_exactly_maximum() {
        let cursor = TextCursor::new("aaab");
        let (values, cursor) = is_char('a').at_most(3).parse(cursor).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(cursor.value(), Some('b'));
    }

    #[test]
    fn test_at_most_zero_matches() {
        let cursor = TextCursor::new("b");
        let (values, next) = at_most(is_char('a'), 2).parse(cursor).unwrap();
        assert!(values.is_empty());
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_at_most_too_many() {
        let cursor = TextCursor::new("aaaa");
        let error = at_most(is_char('a'), 3).parse(cursor).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::TooMany);
        assert_eq!(error.label(), "At most 3 `Parse `a``");
        assert_eq!(error.reason(), Some("found 4 matches, only expected 3"));
        assert_eq!(error.position(), cursor.position());
    }

    #[test]
    fn test_at_most_zero_rejects_any_match() {
        let cursor = TextCursor::new("a");
        assert!(at_most(is_char('a'), 0).parse(cursor).is_err());

        let cursor = TextCursor::new("b");
        let (values, _) = at_most(is_char('a'), 0).parse(cursor).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_at_most_counts_zero_width_matches() {
        use crate::optional::OptionalExt;

        let cursor = TextCursor::new("x");
        let error = at_most(is_char('a').optional(), 2).parse(cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TooMany);
        assert_eq!(error.position(), cursor.position());
    }
}
