use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser gets the original stream, however far the first one
/// got before failing. It is only tried on a Failure: an Error from the
/// first parser is returned as is.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol, Output = P1::Output>,
{
    type Symbol = P1::Symbol;
    type Output = P1::Output;

    fn parse(&self, stream: Stream<'code, P1::Symbol>) -> Reply<'code, P1::Symbol, P1::Output> {
        match self.parser1.parse(stream.clone()) {
            Reply::Failure { .. } => self.parser2.parse(stream),
            reply => reply,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Symbol = Self::Symbol, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
