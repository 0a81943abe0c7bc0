use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Parser that picks a continuation depending on whether a trigger matches
///
/// When `trigger` matches, `then` runs right after it and its value is the
/// result; the trigger's value is dropped. A failing `then` fails the whole
/// branch without falling back. When `trigger` does not match, `otherwise`
/// runs from the original position.
#[derive(Clone)]
pub struct Branch<PT, P1, P2> {
    trigger: PT,
    then: P1,
    otherwise: P2,
    label: Cow<'static, str>,
}

impl<PT, P1, P2> Branch<PT, P1, P2> {
    pub fn new<'code>(trigger: PT, then: P1, otherwise: P2) -> Self
    where
        PT: Parser<'code>,
        P1: Parser<'code>,
        P2: Parser<'code>,
    {
        let label = format!(
            "If `{}` then `{}` else `{}`",
            trigger.label(),
            then.label(),
            otherwise.label()
        )
        .into();
        Branch {
            trigger,
            then,
            otherwise,
            label,
        }
    }
}

impl<'code, PT, P1, P2, O> Parser<'code> for Branch<PT, P1, P2>
where
    PT: Parser<'code>,
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let outcome = match self.trigger.parse(cursor) {
            Ok((_, next)) => self.then.parse(next),
            Err(_) => self.otherwise.parse(cursor),
        };
        outcome.map_err(|error| ParseError::composite(self.label.clone(), &cursor, error))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a Branch parser
pub fn branch<'code, PT, P1, P2, O>(trigger: PT, then: P1, otherwise: P2) -> Branch<PT, P1, P2>
where
    PT: Parser<'code>,
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Branch::new(trigger, then, otherwise)
}

/// Extension trait to use a parser as the trigger of a [`Branch`]
pub trait BranchExt<'code>: Parser<'code> + Sized {
    fn branch<P1, P2>(self, then: P1, otherwise: P2) -> Branch<Self, P1, P2>
    where
        P1: Parser<'code>,
        P2: Parser<'code, Output = P1::Output>,
    {
        Branch::new(self, then, otherwise)
    }
}

impl<'code, P> BranchExt<'code> for P where P: Parser<'code> {}
