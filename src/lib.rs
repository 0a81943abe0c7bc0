//! # textcomb - Parser Combinator Library
//!
//! Small, typed parsers over position-tracked text that combine into
//! recursive-descent grammars.
//!
//! A grammar is a tree of parser values built once and run many times.
//! Building it runs nothing; running it threads a `Copy` cursor through the
//! tree. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Full backtracking**: A failed composite never leaks partial progress
//! - **Rich error reporting**: Line and column, context lines, and a cause chain
//! - **Composability**: Small parsers combine into larger ones using combinators
//!
//! ```
//! use textcomb::prelude::*;
//!
//! let word = many(satisfy(|c| c.is_alphanumeric(), "Alphanumeric"))
//!     .map(|chars| chars.into_iter().collect::<String>())
//!     .named("Word");
//! let event = move_to("@")
//!     .keep_right(string("@("))
//!     .keep_right(separated_pair(word.clone(), many(is_char(' ')), word));
//!
//! let source = "// A comment\n// always @(negedge CLK)\n";
//! let ((edge, signal), _) = event.run(source).unwrap();
//! assert_eq!((edge.as_str(), signal.as_str()), ("negedge", "CLK"));
//! ```

pub mod and;
pub mod at_least;
pub mod at_most;
pub mod between;
pub mod branch;
pub mod char;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod inspect;
pub mod keep;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod proxy;
pub mod relocate;
pub mod repeat;
pub mod repeat_until;
pub mod separated;
pub mod string;

pub use cursor::Cursor;
pub use cursors::TextCursor;
pub use error::{CodeLoc, ErrorKind, ParseError};
pub use parser::{BoxedExt, BoxedParser, NamedExt, ParseResult, Parser};
pub use position::{Position, Span, WithSpanExt};
pub use proxy::{Proxy, ProxyError, ProxyHolder, proxy};

/// Everything needed to write a grammar, for glob import
pub mod prelude {
    pub use crate::and::{AndExt, FlattenExt, and, chain};
    pub use crate::at_least::{AtLeastExt, at_least};
    pub use crate::at_most::{AtMostExt, at_most};
    pub use crate::between::between;
    pub use crate::branch::{BranchExt, branch};
    pub use crate::char::{any, is_char, satisfy};
    pub use crate::inspect::InspectExt;
    pub use crate::keep::{KeepExt, keep_left, keep_right};
    pub use crate::many::{ManyExt, many};
    pub use crate::map::{MapExt, ignore, map};
    pub use crate::optional::{OptionalExt, optional, skip};
    pub use crate::or::{OrExt, either, or};
    pub use crate::parser::named;
    pub use crate::position::with_span;
    pub use crate::relocate::{move_to, step_over};
    pub use crate::repeat::{RepeatExt, repeat};
    pub use crate::repeat_until::{RepeatUntilExt, repeat_until};
    pub use crate::separated::{separated_list, separated_pair};
    pub use crate::string::string;
    pub use crate::{
        BoxedExt, BoxedParser, CodeLoc, Cursor, ErrorKind, NamedExt, ParseError, ParseResult,
        Parser, Position, Proxy, ProxyError, ProxyHolder, Span, TextCursor, WithSpanExt, proxy,
    };
}
