use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that discards the value of a successful parse
pub struct Ignore<P> {
    parser: P,
}

impl<P> Ignore<P> {
    pub fn new(parser: P) -> Self {
        Ignore { parser }
    }
}

impl<'code, P> Parser<'code> for Ignore<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = ();

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, ()> {
        self.parser.parse(stream).map(drop)
    }
}

/// Convenience function to create an Ignore parser
pub fn ignore<'code, P>(parser: P) -> Ignore<P>
where
    P: Parser<'code>,
{
    Ignore::new(parser)
}

/// Extension trait to add .ignore() method support for parsers
pub trait IgnoreExt<'code>: Parser<'code> + Sized {
    fn ignore(self) -> Ignore<Self> {
        Ignore::new(self)
    }
}

/// Implement IgnoreExt for all parsers
impl<'code, P> IgnoreExt<'code> for P where P: Parser<'code> {}
