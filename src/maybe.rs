use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that makes a parser optional
///
/// A success becomes `Some(value)` with the inner parser's residual stream;
/// a failure becomes `None` at the original stream. Errors pass through.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = Option<P::Output>;

    fn parse(
        &self,
        stream: Stream<'code, P::Symbol>,
    ) -> Reply<'code, P::Symbol, Option<P::Output>> {
        match self.parser.parse(stream.clone()) {
            Reply::Success { value, stream } => Reply::success(Some(value), stream),
            Reply::Failure { .. } => Reply::success(None, stream),
            Reply::Error { stream, message } => Reply::Error { stream, message },
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt<'code>: Parser<'code> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Implement MaybeExt for all parsers
impl<'code, P> MaybeExt<'code> for P where P: Parser<'code> {}
