use crate::TextCursor;
use crate::map::Ignore;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that tries the wrapped parser and yields `None` instead of failing
///
/// On a miss nothing is consumed. `Optional` never fails, not even on empty
/// input.
#[derive(Clone)]
pub struct Optional<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Optional<P> {
    pub fn new<'code>(parser: P) -> Self
    where
        P: Parser<'code>,
    {
        let label = format!("Optional `{}`", parser.label()).into();
        Optional { parser, label }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, cursor)),
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Run a parser if it matches and discard whatever it produced
///
/// Unlike [`ignore`](crate::map::ignore), a miss is not an error: `skip`
/// never fails and consumes nothing when the parser does not match.
pub fn skip<'code, P>(parser: P) -> Ignore<Optional<P>>
where
    P: Parser<'code>,
{
    Ignore::new(Optional::new(parser))
}

/// Extension trait to add .optional() and .skip() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn skip(self) -> Ignore<Optional<Self>> {
        skip(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::char::is_char;
    use crate::cursor::Cursor;
    use crate::string::string;

    #[test]
    fn test_optional_present() {
        let cursor = TextCursor::new("-5");
        let (sign, cursor) = is_char('-').optional().parse(cursor).unwrap();
        assert_eq!(sign, Some('-'));
        assert_eq!(cursor.value(), Some('5'));
    }

    #[test]
    fn test_optional_absent_consumes_nothing() {
        let cursor = TextCursor::new("5");
        let (sign, next) = optional(is_char('-')).parse(cursor).unwrap();
        assert_eq!(sign, None);
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_optional_on_empty_input() {
        let cursor = TextCursor::new("");
        let (value, next) = string("abc").optional().parse(cursor).unwrap();
        assert_eq!(value, None);
        assert!(next.eos());
    }

    #[test]
    fn test_optional_partial_match_backtracks() {
        let cursor = TextCursor::new("ab!");
        let parser = is_char('a').and(is_char('c')).optional();

        let (value, next) = parser.parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(next.value(), Some('a'));
    }

    #[test]
    fn test_optional_label() {
        assert_eq!(is_char('x').optional().label(), "Optional `Parse `x``");
    }

    #[test]
    fn test_skip_never_fails() {
        let cursor = TextCursor::new("  x");
        let ((), next) = is_char(' ').skip().parse(cursor).unwrap();
        assert_eq!(next.value(), Some(' '));

        let cursor = TextCursor::new("x");
        let ((), next) = skip(is_char(' ')).parse(cursor).unwrap();
        assert_eq!(next, cursor);
    }
}
