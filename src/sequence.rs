use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that runs parsers one after another, collecting their values in order
///
/// The stream is threaded left to right. The first failure is reported at
/// the stream where the failing parser was attempted, not at the start of
/// the sequence; the first error is returned as the parser reported it.
/// All parsers share one type; use [`BoxedParser`](crate::boxed::BoxedParser)
/// to sequence different parser types with a common output.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut stream: Stream<'code, P::Symbol>,
    ) -> Reply<'code, P::Symbol, Vec<P::Output>> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(stream.clone()) {
                Reply::Success { value, stream: next } => {
                    results.push(value);
                    stream = next;
                }
                Reply::Failure { .. } => return Reply::failure(stream),
                Reply::Error { stream, message } => return Reply::Error { stream, message },
            }
        }

        Reply::success(results, stream)
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser<'code>,
{
    Sequence::new(parsers.into_iter().collect())
}
