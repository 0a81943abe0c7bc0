use crate::parser::{ParseResult, Parser};
use crate::{ParseError, TextCursor};
use std::borrow::Cow;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The composite is atomic: if the second parser fails, the whole composite
/// fails at the position where the first one started.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Use
/// [`flatten3`](FlattenExt::flatten3) and its siblings to collapse them.
///
/// Example:
/// ```
/// use textcomb::prelude::*;
///
/// let (((a, dash), c), _) = is_char('a')
///     .and(is_char('-'))
///     .and(is_char('c'))
///     .run("a-c")
///     .unwrap();
/// assert_eq!((a, dash, c), ('a', '-', 'c'));
/// ```
#[derive(Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
    label: Cow<'static, str>,
}

impl<P1, P2> And<P1, P2> {
    pub fn new<'code>(parser1: P1, parser2: P2) -> Self
    where
        P1: Parser<'code>,
        P2: Parser<'code>,
    {
        let label = format!("`{}` and `{}`", parser1.label(), parser2.label()).into();
        And {
            parser1,
            parser2,
            label,
        }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, next) = self
            .parser1
            .parse(cursor)
            .map_err(|error| ParseError::composite(self.label.clone(), &cursor, error))?;
        let (result2, next) = self
            .parser2
            .parse(next)
            .map_err(|error| ParseError::composite(self.label.clone(), &cursor, error))?;
        Ok(((result1, result2), next))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

/// Runs a list of parsers of the same output type in order
///
/// Yields every value in a flat `Vec`; fails atomically if any parser fails.
#[derive(Clone)]
pub struct Chain<P> {
    parsers: Vec<P>,
    label: Cow<'static, str>,
}

impl<'code, P> Parser<'code> for Chain<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut current = cursor;

        for parser in &self.parsers {
            let (value, next) = parser
                .parse(current)
                .map_err(|error| ParseError::composite(self.label.clone(), &cursor, error))?;
            results.push(value);
            current = next;
        }

        Ok((results, current))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Convenience function to create a Chain parser
///
/// Parsers of different types can be chained after [`boxed`](crate::BoxedExt::boxed).
pub fn chain<'code, P>(parsers: impl IntoIterator<Item = P>) -> Chain<P>
where
    P: Parser<'code>,
{
    let parsers: Vec<P> = parsers.into_iter().collect();
    let label = parsers
        .iter()
        .map(|parser| format!("`{}`", parser.label()))
        .collect::<Vec<_>>()
        .join(" and ")
        .into();
    Chain { parsers, label }
}

/// Left-nested pairs of three values, `((a, b), c)`
pub trait Flatten3 {
    type Flat;

    fn into_flat(self) -> Self::Flat;
}

impl<A, B, C> Flatten3 for ((A, B), C) {
    type Flat = (A, B, C);

    fn into_flat(self) -> Self::Flat {
        let ((a, b), c) = self;
        (a, b, c)
    }
}

/// Left-nested pairs of four values, `(((a, b), c), d)`
pub trait Flatten4 {
    type Flat;

    fn into_flat(self) -> Self::Flat;
}

impl<A, B, C, D> Flatten4 for (((A, B), C), D) {
    type Flat = (A, B, C, D);

    fn into_flat(self) -> Self::Flat {
        let (((a, b), c), d) = self;
        (a, b, c, d)
    }
}

/// Left-nested pairs of five values
pub trait Flatten5 {
    type Flat;

    fn into_flat(self) -> Self::Flat;
}

impl<A, B, C, D, E> Flatten5 for ((((A, B), C), D), E) {
    type Flat = (A, B, C, D, E);

    fn into_flat(self) -> Self::Flat {
        let ((((a, b), c), d), e) = self;
        (a, b, c, d, e)
    }
}

/// Left-nested pairs of six values
pub trait Flatten6 {
    type Flat;

    fn into_flat(self) -> Self::Flat;
}

impl<A, B, C, D, E, F> Flatten6 for (((((A, B), C), D), E), F) {
    type Flat = (A, B, C, D, E, F);

    fn into_flat(self) -> Self::Flat {
        let (((((a, b), c), d), e), f) = self;
        (a, b, c, d, e, f)
    }
}

/// Parser whose nested-pair output is collapsed into a flat tuple of `N` values
#[derive(Clone)]
pub struct Flattened<P, const N: usize> {
    parser: P,
}

macro_rules! flattened_parser {
    ($arity:literal, $flatten:ident) => {
        impl<'code, P> Parser<'code> for Flattened<P, $arity>
        where
            P: Parser<'code>,
            P::Output: $flatten,
        {
            type Output = <P::Output as $flatten>::Flat;

            fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
                let (value, next) = self.parser.parse(cursor)?;
                Ok(($flatten::into_flat(value), next))
            }

            fn label(&self) -> &str {
                self.parser.label()
            }
        }
    };
}

flattened_parser!(3, Flatten3);
flattened_parser!(4, Flatten4);
flattened_parser!(5, Flatten5);
flattened_parser!(6, Flatten6);

/// Extension trait to collapse the output of chained `.and()` calls
///
/// The arity is explicit: `(((a, b), c), d)` is also `((x, c), d)` with
/// `x = (a, b)`, so `flatten3` on it yields `((a, b), c, d)`.
pub trait FlattenExt<'code>: Parser<'code> + Sized {
    fn flatten3(self) -> Flattened<Self, 3>
    where
        Self::Output: Flatten3,
    {
        Flattened { parser: self }
    }

    fn flatten4(self) -> Flattened<Self, 4>
    where
        Self::Output: Flatten4,
    {
        Flattened { parser: self }
    }

    fn flatten5(self) -> Flattened<Self, 5>
    where
        Self::Output: Flatten5,
    {
        Flattened { parser: self }
    }

    fn flatten6(self) -> Flattened<Self, 6>
    where
        Self::Output: Flatten6,
    {
        Flattened { parser: self }
    }
}

impl<'code, P> FlattenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::char::is_char;
    use crate::cursor::Cursor;
    use crate::map::MapExt;
    use crate::parser::BoxedExt;
    use crate::string::string;

    #[test]
    fn test_and_both_succeed() {
        let cursor = TextCursor::new("ac");
        let parser = is_char('a').and(is_char('c'));

        let ((a, c), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((a, c), ('a', 'c'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_and_first_fails() {
        let cursor = TextCursor::new("bc");
        let parser = is_char('a').and(is_char('c'));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.label(), "`Parse `a`` and `Parse `c``");
        assert_eq!(error.reason(), Some("expected `a`, found `b`"));
        assert_eq!(error.position(), cursor.position());
    }

    #[test]
    fn test_and_second_fails_resets_to_entry() {
        let cursor = TextCursor::new("ab");
        let parser = is_char('a').and(is_char('c'));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Composite);
        assert_eq!(error.position(), cursor.position());
        assert_eq!(error.cause().unwrap().position().column, 2);
    }

    #[test]
    fn test_and_chain_nests_pairs() {
        let cursor = TextCursor::new("a-c");
        let parser = is_char('a').and(is_char('-')).and(is_char('c'));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, (('a', '-'), 'c'));
    }

    #[test]
    fn test_and_function_syntax() {
        let cursor = TextCursor::new("XY");
        let ((x, y), cursor) = and(is_char('X'), is_char('Y')).parse(cursor).unwrap();
        assert_eq!((x, y), ('X', 'Y'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_flatten_collapses_nested_pairs() {
        let cursor = TextCursor::new("abcd");
        let parser = is_char('a')
            .and(is_char('b'))
            .and(is_char('c'))
            .and(is_char('d'))
            .flatten4();

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, ('a', 'b', 'c', 'd'));
    }

    #[test]
    fn test_flatten_arity_is_explicit() {
        let parser = is_char('a')
            .and(is_char('b'))
            .and(is_char('c'))
            .and(is_char('d'));

        let (partial, _) = parser.clone().flatten3().run("abcd").unwrap();
        assert_eq!(partial, (('a', 'b'), 'c', 'd'));

        let (six, _) = parser
            .and(is_char('e'))
            .and(is_char('f'))
            .flatten6()
            .run("abcdef")
            .unwrap();
        assert_eq!(six, ('a', 'b', 'c', 'd', 'e', 'f'));
    }

    #[test]
    fn test_chain_homogeneous() {
        let cursor = TextCursor::new("xyz!");
        let parser = chain(['x', 'y', 'z'].map(is_char));

        let (values, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(values, vec!['x', 'y', 'z']);
        assert_eq!(cursor.value(), Some('!'));
    }

    #[test]
    fn test_chain_boxed_heterogeneous() {
        let cursor = TextCursor::new("<tag>");
        let parser = chain([
            is_char('<').map(String::from).boxed(),
            string("tag").map(String::from).boxed(),
            is_char('>').map(String::from).boxed(),
        ]);

        let (values, _) = parser.parse(cursor).unwrap();
        assert_eq!(values.concat(), "<tag>");
    }

    #[test]
    fn test_chain_fails_atomically() {
        let cursor = TextCursor::new("xyq");
        let parser = chain(['x', 'y', 'z'].map(is_char));

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), cursor.position());
        assert_eq!(error.label(), "`Parse `x`` and `Parse `y`` and `Parse `z``");
    }
}
