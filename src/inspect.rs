use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::TextCursor;

/// Parser that hands every outcome of the wrapped parser to an observer
///
/// The observer sees successes and failures alike. It cannot change the
/// outcome, which is returned to the caller untouched.
#[derive(Clone)]
pub struct Inspect<P, F> {
    parser: P,
    observer: F,
}

impl<P, F> Inspect<P, F> {
    pub fn new(parser: P, observer: F) -> Self {
        Inspect { parser, observer }
    }
}

impl<'code, P, F> Parser<'code> for Inspect<P, F>
where
    P: Parser<'code>,
    F: Fn(&ParseResult<'code, P::Output>),
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let outcome = self.parser.parse(cursor);
        (self.observer)(&outcome);
        outcome
    }

    fn label(&self) -> &str {
        self.parser.label()
    }
}

/// Parser that reports every attempt of the wrapped parser through `log`
///
/// Attempts and matches go to `trace`, failures to `debug`.
#[derive(Clone)]
pub struct Traced<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Traced<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        log::trace!("{}: trying at {}", self.parser.label(), cursor.position());
        let outcome = self.parser.parse(cursor);
        match &outcome {
            Ok((_, next)) => log::trace!(
                "{}: matched {}..{}",
                self.parser.label(),
                cursor.position(),
                next.position()
            ),
            Err(error) => log::debug!(
                "{}: failed at {}: {}",
                self.parser.label(),
                error.position(),
                error.reason().unwrap_or("no reason given")
            ),
        }
        outcome
    }

    fn label(&self) -> &str {
        self.parser.label()
    }
}

/// Extension trait to add .inspect() and .trace() method support for parsers
pub trait InspectExt<'code>: Parser<'code> + Sized {
    fn inspect<F>(self, observer: F) -> Inspect<Self, F>
    where
        F: Fn(&ParseResult<'code, Self::Output>),
    {
        Inspect::new(self, observer)
    }

    fn trace(self) -> Traced<Self> {
        Traced { parser: self }
    }
}

impl<'code, P> InspectExt<'code> for P where P: Parser<'code> {}
