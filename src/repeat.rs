use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that matches exactly `count` consecutive occurrences of a parser
///
/// A count of zero succeeds immediately without consuming input. A failure
/// before the count is reached is reported where that repetition was
/// attempted.
pub struct Repeat<P> {
    parser: P,
    count: usize,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Repeat { parser, count }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut stream: Stream<'code, P::Symbol>,
    ) -> Reply<'code, P::Symbol, Vec<P::Output>> {
        let mut results = Vec::with_capacity(self.count);

        for _ in 0..self.count {
            match self.parser.parse(stream.clone()) {
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

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(parser: P, count: usize) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, count)
}

/// Extension trait to add .repeat() method support for parsers
pub trait RepeatExt<'code>: Parser<'code> + Sized {
    fn repeat(self, count: usize) -> Repeat<Self> {
        Repeat::new(self, count)
    }
}

/// Implement RepeatExt for all parsers
impl<'code, P> RepeatExt<'code> for P where P: Parser<'code> {}
