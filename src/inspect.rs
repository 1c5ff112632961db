use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that calls a function with each successful value before passing it on
///
/// Under backtracking the function may see values from alternatives that
/// are later abandoned.
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
    F: Fn(&P::Output),
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        let reply = self.parser.parse(stream);
        if let Some(value) = reply.value() {
            (self.observer)(value);
        }
        reply
    }
}

/// Convenience function to create an Inspect parser
pub fn inspect<'code, P, F>(parser: P, observer: F) -> Inspect<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output),
{
    Inspect::new(parser, observer)
}

/// Extension trait to add .inspect() method support for parsers
pub trait InspectExt<'code>: Parser<'code> + Sized {
    fn inspect<F>(self, observer: F) -> Inspect<Self, F>
    where
        F: Fn(&Self::Output),
    {
        Inspect::new(self, observer)
    }
}

/// Implement InspectExt for all parsers
impl<'code, P> InspectExt<'code> for P where P: Parser<'code> {}
