use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A success whose value is rejected becomes a failure at the stream the
/// parser started from, so an enclosing alternative can still try the
/// same input.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        match self.parser.parse(stream.clone()) {
            Reply::Success { value, .. } if !(self.predicate)(&value) => Reply::failure(stream),
            reply => reply,
        }
    }
}

/// Convenience function to create a FilterParser
pub fn filter<'code, P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<'code, P> FilterExt<'code> for P where P: Parser<'code> {}
