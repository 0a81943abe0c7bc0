use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::{CodeLoc, ErrorKind, ParseError, TextCursor};
use std::borrow::Cow;

// Helper function to reduce error creation boilerplate
fn create_error<'code>(
    cursor: &TextCursor<'code>,
    label: &Cow<'static, str>,
    found: Option<char>,
    expected: Option<char>,
) -> ParseError<'code> {
    let found = match found {
        Some(ch) => format!("`{}`", ch),
        None => "EOF".to_string(),
    };
    let reason = match expected {
        Some(expected) => format!("expected `{}`, found {}", expected, found),
        None => format!("found {}", found),
    };
    let kind = if cursor.eos() {
        ErrorKind::EndOfInput
    } else {
        ErrorKind::Mismatch
    };
    ParseError::new(kind, label.clone(), Some(reason.into()), CodeLoc::at(cursor))
}

/// Parser that consumes one character accepted by a predicate
#[derive(Clone)]
pub struct Satisfy<F> {
    predicate: F,
    label: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, label: Cow<'static, str>) -> Self {
        Satisfy { predicate, label }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.value() {
            Some(ch) if (self.predicate)(ch) => Ok((ch, cursor.next())),
            found => Err(create_error(&cursor, &self.label, found, None)),
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, label.into())
}

/// Parser that matches a specific character
#[derive(Clone)]
pub struct IsChar {
    expected: char,
    label: Cow<'static, str>,
}

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.value() {
            Some(ch) if ch == self.expected => Ok((ch, cursor.next())),
            found => Err(create_error(&cursor, &self.label, found, Some(self.expected))),
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar {
        expected,
        label: format!("Parse `{}`", expected).into(),
    }
}

/// Parser that consumes any single character
pub type AnyChar = Satisfy<fn(char) -> bool>;

/// Convenience function to create a parser that accepts any character
///
/// Fails only at the end of the input.
pub fn any() -> AnyChar {
    fn accept(_: char) -> bool {
        true
    }
    Satisfy::new(accept as fn(char) -> bool, Cow::Borrowed("Anything"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfy_consumes_one_char() {
        let cursor = TextCursor::new("a1");
        let parser = satisfy(|c| c.is_alphabetic(), "Letter");

        let (ch, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.value(), Some('1'));
    }

    #[test]
    fn test_satisfy_failure_names_character() {
        let cursor = TextCursor::new("1");
        let parser = satisfy(|c| c.is_alphabetic(), "Letter");

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Mismatch);
        assert_eq!(error.label(), "Letter");
        assert_eq!(error.reason(), Some("found `1`"));
        assert_eq!(error.position(), cursor.position());
    }

    #[test]
    fn test_satisfy_failure_at_eof() {
        let cursor = TextCursor::new("");
        let parser = satisfy(|c| c.is_whitespace(), "Whitespace");

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EndOfInput);
        assert_eq!(error.reason(), Some("found EOF"));
    }

    #[test]
    fn test_satisfy_whitespace_run() {
        let mut cursor = TextCursor::new(" \n\tc");
        let space = satisfy(|c| c.is_whitespace(), "Whitespace");
        while let Ok((_, next)) = space.parse(cursor) {
            cursor = next;
        }
        let (ch, _) = is_char('c').parse(cursor).unwrap();
        assert_eq!(ch, 'c');
    }

    #[test]
    fn test_is_char_sequence() {
        let cursor = TextCursor::new("ac");
        let (a, cursor) = is_char('a').parse(cursor).unwrap();
        let (c, cursor) = is_char('c').parse(cursor).unwrap();
        assert_eq!((a, c), ('a', 'c'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_is_char_mismatch() {
        let cursor = TextCursor::new("b");
        let error = is_char('a').parse(cursor).unwrap_err();
        assert_eq!(error.label(), "Parse `a`");
        assert_eq!(error.reason(), Some("expected `a`, found `b`"));
    }

    #[test]
    fn test_is_char_unicode() {
        let cursor = TextCursor::new("ä!");
        let (ch, cursor) = is_char('ä').parse(cursor).unwrap();
        assert_eq!(ch, 'ä');
        assert_eq!(cursor.value(), Some('!'));
    }

    #[test]
    fn test_any_accepts_everything_until_eof() {
        let input = "123ojmfälasdkas+ ;-:";
        let mut cursor = TextCursor::new(input);
        let mut count = 0;
        while let Ok((_, next)) = any().parse(cursor) {
            cursor = next;
            count += 1;
        }
        assert_eq!(count, input.chars().count());

        let error = any().parse(cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EndOfInput);
        assert_eq!(error.label(), "Anything");
    }
}
