use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with the inner value when the inner parser succeeds, and fails
/// when it fails; either way the reply carries the stream it was given.
/// An Error keeps the stream the inner parser reported.
///
/// The inner parser runs for real, so it must be free of side effects
/// beyond its reply; anything it does happens again when the caller goes
/// on to parse the same input.
pub struct And<P> {
    parser: P,
}

impl<P> And<P> {
    pub fn new(parser: P) -> Self {
        And { parser }
    }
}

impl<'code, P> Parser<'code> for And<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        match self.parser.parse(stream.clone()) {
            Reply::Success { value, .. } => Reply::success(value, stream),
            Reply::Failure { .. } => Reply::failure(stream),
            reply => reply,
        }
    }
}

/// Convenience function to create an And parser for positive lookahead
pub fn and<'code, P>(parser: P) -> And<P>
where
    P: Parser<'code>,
{
    And::new(parser)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and(self) -> And<Self> {
        And::new(self)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
