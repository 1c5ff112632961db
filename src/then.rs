use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.then()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Destructuring
/// the nested tuple spells out the parsing order.
///
/// Example:
/// ```
/// use parsistream::{Parser, Stream, ThenExt, satisfy, symbol};
///
/// let digit = || satisfy(|c: char| c.is_ascii_digit());
/// let ((whole, _), frac) = digit()
///     .then(symbol('.'))
///     .then(digit())
///     .parse(Stream::from_text("3.5"))
///     .ok()
///     .unwrap();
/// assert_eq!((whole, frac), ('3', '5'));
/// ```
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, stream: Stream<'code, P1::Symbol>) -> Reply<'code, P1::Symbol, Self::Output> {
        self.parser1
            .parse(stream)
            .and_then(|first, stream| self.parser2.parse(stream).map(|second| (first, second)))
    }
}

/// Keep only the first of two sequenced results
pub struct ThenIgnore<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for ThenIgnore<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = P1::Output;

    fn parse(&self, stream: Stream<'code, P1::Symbol>) -> Reply<'code, P1::Symbol, P1::Output> {
        self.parser1
            .parse(stream)
            .and_then(|first, stream| self.parser2.parse(stream).map(|_| first))
    }
}

/// Keep only the second of two sequenced results
pub struct IgnoreThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for IgnoreThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = P2::Output;

    fn parse(&self, stream: Stream<'code, P1::Symbol>) -> Reply<'code, P1::Symbol, P2::Output> {
        self.parser1
            .parse(stream)
            .and_then(|_, stream| self.parser2.parse(stream))
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
{
    Then::new(parser1, parser2)
}

/// Extension trait to add .then(), .then_ignore() and .ignore_then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol>,
    {
        Then::new(self, other)
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol>,
    {
        ThenIgnore {
            parser1: self,
            parser2: other,
        }
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol>,
    {
        IgnoreThen {
            parser1: self,
            parser2: other,
        }
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}
