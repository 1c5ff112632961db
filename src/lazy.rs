use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between grammar functions.
///
/// The factory runs on every parse. For a grammar that refers to itself,
/// [`recursive`](crate::recursive::recursive) builds the parser once.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        (self.factory)().parse(stream)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
