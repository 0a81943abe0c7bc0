use crate::cursor::Cursor;
use crate::position::Position;
use crate::TextCursor;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// What went wrong, independent of where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A primitive matcher saw a character it does not accept
    Mismatch,
    /// A primitive matcher ran out of input
    EndOfInput,
    /// A combinator failed because one of its parts failed
    Composite,
    /// Every branch of an alternation failed
    NoAlternative,
    /// Fewer repetitions than required
    TooFew,
    /// More repetitions than allowed
    TooMany,
    /// A seek target does not occur in the remaining input
    MarkerNotFound,
    /// A proxy parser was invoked before its definition was supplied
    ProxyUndefined,
}

/// Location of an error within the source code
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    position: Position,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, position: Position) -> Self {
        Self { code, position }
    }

    pub fn at(cursor: &TextCursor<'code>) -> Self {
        Self::new(cursor.source(), cursor.position())
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    fn context_lines(&self) -> Vec<String> {
        let error_line = self.position.line;
        let first = error_line.saturating_sub(2).max(1);
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > error_line + 2 {
                break;
            }

            let prefix = if number == error_line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == error_line {
                let offset = prefix.chars().count() + self.position.column - 1;
                lines.push(format!("{}^--- here", " ".repeat(offset)));
            }
        }

        lines
    }
}

/// Failure of a parse attempt
///
/// Errors are plain data: a label naming what was being attempted, an
/// optional reason, and the position at which the failing parser started.
/// Combinators that wrap a failing sub-parser keep the sub-error as their
/// [`cause`](ParseError::cause).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError<'code> {
    kind: ErrorKind,
    label: Cow<'static, str>,
    reason: Option<Cow<'static, str>>,
    loc: CodeLoc<'code>,
    cause: Option<Box<ParseError<'code>>>,
}

impl<'code> ParseError<'code> {
    pub fn new(
        kind: ErrorKind,
        label: impl Into<Cow<'static, str>>,
        reason: Option<Cow<'static, str>>,
        loc: CodeLoc<'code>,
    ) -> Self {
        ParseError {
            kind,
            label: label.into(),
            reason,
            loc,
            cause: None,
        }
    }

    /// Failure of a combinator labeled `label` that started at `cursor`,
    /// caused by `inner`
    ///
    /// The reason is carried over from `inner` or, when `inner` has none,
    /// synthesized from its label.
    pub fn composite(
        label: impl Into<Cow<'static, str>>,
        cursor: &TextCursor<'code>,
        inner: ParseError<'code>,
    ) -> Self {
        let reason = match &inner.reason {
            Some(reason) => reason.clone(),
            None => format!("during parsing of `{}`", inner.label).into(),
        };
        ParseError {
            kind: ErrorKind::Composite,
            label: label.into(),
            reason: Some(reason),
            loc: CodeLoc::at(cursor),
            cause: Some(Box::new(inner)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn position(&self) -> Position {
        self.loc.position()
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// The sub-parser failure this error wraps, if any
    pub fn cause(&self) -> Option<&ParseError<'code>> {
        self.cause.as_deref()
    }

    /// The innermost error of the cause chain
    pub fn root_cause(&self) -> &ParseError<'code> {
        let mut error = self;
        while let Some(cause) = error.cause() {
            error = cause;
        }
        error
    }

    /// Attach the sub-parser failure that led to this error
    pub fn caused_by(mut self, inner: ParseError<'code>) -> Self {
        self.cause = Some(Box::new(inner));
        self
    }

    /// The same failure reported under another label
    pub fn relabel(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.loc.position();
        write!(
            f,
            "Failed to parse {} at line {}, column {}",
            self.label, position.line, position.column
        )?;
        if let Some(reason) = &self.reason {
            write!(f, " -> {}", reason)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        for line in self.loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Error for ParseError<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc_after<'a>(code: &'a str, consumed: &str) -> CodeLoc<'a> {
        CodeLoc::new(code, Position::start().advanced_over(consumed))
    }

    #[test]
    fn test_display_empty_input() {
        let error = ParseError::new(
            ErrorKind::EndOfInput,
            "Parse `a`",
            Some("found EOF".into()),
            CodeLoc::new("", Position::start()),
        );

        let display = error.to_string();
        assert!(display.contains("Parse `a`"));
        assert!(display.contains("found EOF"));
    }

    #[test]
    fn test_display_points_at_column() {
        let code = "hello\nworld";
        let error = ParseError::new(ErrorKind::Mismatch, "Parse `x`", None, loc_after(code, "hello\nwo"));

        let display = error.to_string();
        assert!(display.contains("line 2, column 3"));
        assert!(display.contains("  > 2 | world"));
        assert!(display.contains("^--- here"));
    }

    #[test]
    fn test_context_lines_window() {
        let code = "l1\nl2\nl3\nl4\nl5\nl6\nl7";
        let loc = loc_after(code, "l1\nl2\nl3\n");
        let context = loc.context_lines().join("\n");

        assert!(!context.contains("l1"));
        assert!(context.contains("l2"));
        assert!(context.contains("> 4 | l4"));
        assert!(context.contains("l6"));
        assert!(!context.contains("l7"));
    }

    #[test]
    fn test_context_lines_eos_after_newline() {
        let code = "hello\n";
        let loc = loc_after(code, code);
        let context = loc.context_lines().join("\n");
        assert!(context.contains("> 2 | "));
    }

    #[test]
    fn test_composite_carries_inner_reason() {
        let code = "ab";
        let cursor = TextCursor::new(code);
        let inner = ParseError::new(
            ErrorKind::Mismatch,
            "Parse `c`",
            Some("expected `c`, found `b`".into()),
            loc_after(code, "a"),
        );

        let error = ParseError::composite("`a` and `c`", &cursor, inner);
        assert_eq!(error.kind(), ErrorKind::Composite);
        assert_eq!(error.reason(), Some("expected `c`, found `b`"));
        assert_eq!(error.position(), Position::start());
        assert_eq!(error.cause().unwrap().label(), "Parse `c`");
    }

    #[test]
    fn test_composite_synthesizes_reason() {
        let cursor = TextCursor::new("x");
        let inner = ParseError::new(ErrorKind::NoAlternative, "Either `a` or `b`", None, CodeLoc::at(&cursor));

        let error = ParseError::composite("Word", &cursor, inner);
        assert_eq!(error.reason(), Some("during parsing of `Either `a` or `b``"));
    }

    #[test]
    fn test_root_cause_and_relabel() {
        let cursor = TextCursor::new("x");
        let leaf = ParseError::new(ErrorKind::Mismatch, "leaf", None, CodeLoc::at(&cursor));
        let middle = ParseError::composite("middle", &cursor, leaf);
        let top = ParseError::composite("top", &cursor, middle).relabel("renamed");

        assert_eq!(top.label(), "renamed");
        assert_eq!(top.root_cause().label(), "leaf");
    }
}
