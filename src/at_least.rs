use crate::many::run_greedy;
use crate::parser::{ParseResult, Parser};
use crate::{CodeLoc, ErrorKind, ParseError, TextCursor};
use std::borrow::Cow;

/// Parser combinator that matches the given parser `minimum` times or more
///
/// Collects greedily like [`many`](crate::many::many) and returns every
/// value, not just the first `minimum`. Too few matches fail at the starting
/// position.
#[derive(Clone)]
pub struct AtLeast<P> {
    parser: P,
    minimum: usize,
    label: Cow<'static, str>,
}

impl<P> AtLeast<P> {
    pub fn new<'code>(parser: P, minimum: usize) -> Self
    where
        P: Parser<'code>,
    {
        let label = format!("At least {} `{}`", minimum, parser.label()).into();
        AtLeast {
            parser,
            minimum,
            label,
        }
    }
}

impl<'code, P> Parser<'code> for AtLeast<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let run = run_greedy(&self.parser, &self.label, cursor);
        if run.values.len() >= self.minimum {
            return Ok((run.values, run.cursor));
        }

        let reason = format!(
            "expected at least {} matches, found {}",
            self.minimum,
            run.values.len()
        );
        let error = ParseError::new(
            ErrorKind::TooFew,
            self.label.clone(),
            Some(reason.into()),
            CodeLoc::at(&cursor),
        );
        Err(match run.stopped_by {
            Some(inner) => error.caused_by(inner),
            None => error,
        })
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create an AtLeast parser
pub fn at_least<'code, P>(parser: P, minimum: usize) -> AtLeast<P>
where
    P: Parser<'code>,
{
    AtLeast::new(parser, minimum)
}

/// Extension trait to add .at_least() method support for parsers
pub trait AtLeastExt<'code>: Parser<'code> + Sized {
    fn at_least(self, minimum: usize) -> AtLeast<Self> {
        AtLeast::new(self, minimum)
    }
}

impl<'code, P> AtLeastExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::char::{is_char, satisfy};
    use crate::cursor::Cursor;
    use crate::optional::OptionalExt;

    #[test]
    fn test_at_least_exact_minimum() {
        let cursor = TextCursor::new(".....a");
        let (dots, cursor) = at_least(is_char('.'), 5).parse(cursor).unwrap();
        assert_eq!(dots.len(), 5);
        assert_eq!(cursor.value(), Some('a'));
    }

    #[test]
    fn test_at_least_keeps_every_match() {
        let cursor = TextCursor::new("1234x");
        let digit = satisfy(|c| c.is_ascii_digit(), "Digit");
        let (digits, _) = digit.at_least(2).parse(cursor).unwrap();
        assert_eq!(digits, vec!['1', '2', '3', '4']);
    }

    #[test]
    fn test_at_least_too_few() {
        let cursor = TextCursor::new("...a");
        let error = at_least(is_char('.'), 5).parse(cursor).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::TooFew);
        assert_eq!(error.label(), "At least 5 `Parse `.``");
        assert_eq!(error.reason(), Some("expected at least 5 matches, found 3"));
        assert_eq!(error.position(), cursor.position());
        assert_eq!(error.cause().unwrap().reason(), Some("expected `.`, found `a`"));
    }

    #[test]
    fn test_at_least_zero_never_fails() {
        let cursor = TextCursor::new("");
        let (values, _) = at_least(is_char('.'), 0).parse(cursor).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_at_least_dots_around_letter() {
        let cursor = TextCursor::new(".....a.....");
        let dots = || at_least(is_char('.'), 5);
        let parser = dots().and(is_char('a')).and(dots());

        let (((left, a), right), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(left.len(), 5);
        assert_eq!(a, 'a');
        assert_eq!(right.len(), 5);
        assert!(cursor.eos());
    }

    #[test]
    fn test_at_least_zero_width_counts_once() {
        let cursor = TextCursor::new("x");
        let parser = at_least(is_char('a').optional(), 2);
        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.reason(), Some("expected at least 2 matches, found 1"));
        assert!(error.cause().is_none());
    }
}
