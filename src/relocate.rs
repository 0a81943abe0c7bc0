use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::position::Position;
use crate::{CodeLoc, ErrorKind, ParseError, TextCursor};
use std::borrow::Cow;

/// Parser that skips a fixed number of lines and columns without looking at them
///
/// Moves past `lines` line breaks and then `columns` characters. Always
/// succeeds; stops early at the end of the input.
#[derive(Clone)]
pub struct StepOver {
    lines: usize,
    columns: usize,
    label: Cow<'static, str>,
}

impl StepOver {
    pub fn new(lines: usize, columns: usize) -> Self {
        let label = format!("Step over {} lines and {} columns", lines, columns).into();
        StepOver {
            lines,
            columns,
            label,
        }
    }
}

impl<'code> Parser<'code> for StepOver {
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(((), cursor.step_over(self.lines, self.columns)))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a StepOver parser
pub fn step_over(lines: usize, columns: usize) -> StepOver {
    StepOver::new(lines, columns)
}

/// Parser that jumps to the next occurrence of a marker string
///
/// The cursor lands on the first character of the marker, so the marker
/// itself is still there to be parsed. Yields the marker's position.
#[derive(Clone)]
pub struct MoveTo {
    marker: Cow<'static, str>,
    label: Cow<'static, str>,
}

impl MoveTo {
    pub fn new(marker: impl Into<Cow<'static, str>>) -> Self {
        let marker = marker.into();
        let label = format!("Move to `{}`", marker).into();
        MoveTo { marker, label }
    }
}

impl<'code> Parser<'code> for MoveTo {
    type Output = Position;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.seek(&self.marker) {
            Some(position) => Ok((position, cursor.relocate(position))),
            None => {
                let reason = format!("`{}` does not occur in the remaining input", self.marker);
                Err(ParseError::new(
                    ErrorKind::MarkerNotFound,
                    self.label.clone(),
                    Some(reason.into()),
                    CodeLoc::at(&cursor),
                ))
            }
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a MoveTo parser
pub fn move_to(marker: impl Into<Cow<'static, str>>) -> MoveTo {
    MoveTo::new(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keep::KeepExt;
    use crate::string::string;

    #[test]
    fn test_step_over_columns() {
        let cursor = TextCursor::new("Not relevant Here");
        let (_, cursor) = step_over(0, "Not relevant ".len()).parse(cursor).unwrap();
        assert_eq!(cursor.remaining(), "Here");
    }

    #[test]
    fn test_step_over_lines() {
        let cursor = TextCursor::new("\n\nHere interesting");
        let (_, cursor) = step_over(2, 0).parse(cursor).unwrap();
        assert_eq!(cursor.position().line, 3);
        assert_eq!(cursor.remaining(), "Here interesting");
    }

    #[test]
    fn test_step_over_past_end_succeeds() {
        let cursor = TextCursor::new("ab");
        let (_, cursor) = step_over(3, 10).parse(cursor).unwrap();
        assert!(cursor.eos());
    }

    #[test]
    fn test_step_over_label() {
        assert_eq!(step_over(1, 2).label(), "Step over 1 lines and 2 columns");
    }

    #[test]
    fn test_move_to_lands_on_marker() {
        let cursor = TextCursor::new("// always\n// @(posedge clk)");
        let (position, cursor) = move_to("@").parse(cursor).unwrap();

        assert_eq!(position.line, 2);
        assert_eq!(position.column, 4);
        assert_eq!(cursor.position(), position);
        assert_eq!(cursor.value(), Some('@'));
    }

    #[test]
    fn test_move_to_then_parse_marker() {
        let cursor = TextCursor::new("noise noise => value");
        let parser = move_to("=>").keep_right(string("=> "));

        let (matched, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(matched, "=> ");
        assert_eq!(cursor.remaining(), "value");
    }

    #[test]
    fn test_move_to_already_on_marker() {
        let cursor = TextCursor::new("@x");
        let (_, next) = move_to("@").parse(cursor).unwrap();
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_move_to_missing_marker() {
        let cursor = TextCursor::new("nothing here").next();
        let error = move_to("@").parse(cursor).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MarkerNotFound);
        assert_eq!(error.label(), "Move to `@`");
        assert_eq!(error.position(), cursor.position());
    }
}
