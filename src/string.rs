use crate::char::is_char;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// A partial match fails as a whole, reported at the position where the
/// string was expected to start.
#[derive(Clone)]
pub struct StringParser {
    expected: Cow<'static, str>,
    label: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let label = format!("String `{}`", expected).into();
        Self { expected, label }
    }
}

impl<'code> Parser<'code> for StringParser {
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut current = cursor;

        for expected_char in self.expected.chars() {
            match is_char(expected_char).parse(current) {
                Ok((_, next)) => current = next,
                Err(error) => return Err(ParseError::composite(self.label.clone(), &cursor, error)),
            }
        }

        let start = cursor.position().offset;
        let end = current.position().offset;
        Ok((&cursor.source()[start..end], current))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}
