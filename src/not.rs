use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds. An Error from the given parser is
/// propagated. Never consumes any input on success or failure.
///
/// Like [`and`](crate::and::and), the inner parser runs for real and must
/// be free of side effects beyond its reply.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = ();

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, ()> {
        match self.parser.parse(stream.clone()) {
            Reply::Success { .. } => Reply::failure(stream),
            Reply::Failure { .. } => Reply::success((), stream),
            Reply::Error { stream, message } => Reply::Error { stream, message },
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
