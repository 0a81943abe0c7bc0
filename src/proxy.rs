use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::{CodeLoc, ErrorKind, ParseError, TextCursor};
use std::borrow::Cow;
use std::cell::OnceCell;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

type Slot<'code, T> = Rc<OnceCell<BoxedParser<'code, T>>>;

/// Stand-in for a parser that is defined later
///
/// Combinators build their composition eagerly, so a rule that refers to
/// itself (directly or through other rules) cannot be written as a plain
/// value. A `Proxy` can be cloned into the grammar before its definition
/// exists; the matching [`ProxyHolder`] supplies the definition exactly once.
///
/// A proxy whose definition contains a clone of itself forms a reference
/// cycle, so such a grammar is never freed before the process ends.
pub struct Proxy<'code, T> {
    slot: Slot<'code, T>,
    label: Cow<'static, str>,
}

impl<T> Clone for Proxy<'_, T> {
    fn clone(&self) -> Self {
        Proxy {
            slot: Rc::clone(&self.slot),
            label: self.label.clone(),
        }
    }
}

impl<T> Proxy<'_, T> {
    /// Whether the definition has been supplied
    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<'code, T> Parser<'code> for Proxy<'code, T> {
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.slot.get() {
            Some(parser) => parser.parse(cursor),
            None => {
                log::error!("Proxy `{}` was invoked before it was defined", self.label);
                Err(ParseError::new(
                    ErrorKind::ProxyUndefined,
                    self.label.clone(),
                    Some("not implemented: the proxy has no definition yet".into()),
                    CodeLoc::at(&cursor),
                ))
            }
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Write side of a [`Proxy`]
pub struct ProxyHolder<'code, T> {
    slot: Slot<'code, T>,
}

impl<'code, T> ProxyHolder<'code, T> {
    /// Supply the definition every clone of the proxy runs
    ///
    /// Only the first definition counts; later attempts are rejected.
    pub fn define<P>(&self, parser: P) -> Result<(), ProxyError>
    where
        P: Parser<'code, Output = T> + 'code,
    {
        self.slot
            .set(Box::new(parser))
            .map_err(|_| ProxyError::AlreadyDefined)
    }
}

/// Misuse of a [`ProxyHolder`] while building a grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyError {
    /// The proxy received a second definition
    AlreadyDefined,
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::AlreadyDefined => write!(f, "Proxy parser is already defined"),
        }
    }
}

impl Error for ProxyError {}

/// Create a proxy parser and the holder that defines it
///
/// # Example
/// ```
/// use textcomb::prelude::*;
///
/// // list := "[" list* "]"
/// let (list, holder) = proxy::<usize>("List");
/// holder
///     .define(between(is_char('['), many(list.clone()), is_char(']')).map(|inner| inner.len()))
///     .unwrap();
///
/// let (children, _) = list.run("[[][][[]]]").unwrap();
/// assert_eq!(children, 3);
/// ```
pub fn proxy<'code, T>(label: impl Into<Cow<'static, str>>) -> (Proxy<'code, T>, ProxyHolder<'code, T>) {
    let slot: Slot<'code, T> = Rc::new(OnceCell::new());
    let proxy = Proxy {
        slot: Rc::clone(&slot),
        label: label.into(),
    };
    (proxy, ProxyHolder { slot })
}
