use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

const ZERO_WIDTH: &str = "repeated parser succeeded without consuming input";

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Greedy: collects successes until the parser fails, and succeeds at the
/// stream where that failing attempt started. An error from the parser
/// ends the repetition with that error.
///
/// A parser that succeeds without consuming input would repeat forever, so
/// such a success is reported as an error instead.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, Vec<P::Output>> {
        collect_into(&self.parser, stream, Vec::new())
    }
}

/// Keep applying `parser` from `stream`, appending to `results`
pub(crate) fn collect_into<'code, P>(
    parser: &P,
    mut stream: Stream<'code, P::Symbol>,
    mut results: Vec<P::Output>,
) -> Reply<'code, P::Symbol, Vec<P::Output>>
where
    P: Parser<'code>,
{
    loop {
        match parser.parse(stream.clone()) {
            Reply::Success { value, stream: next } => {
                if next.position().index() == stream.position().index() {
                    tracing::debug!(
                        position = %stream.position(),
                        "rejecting zero-width repetition"
                    );
                    return Reply::error(stream, ZERO_WIDTH);
                }
                results.push(value);
                stream = next;
            }
            Reply::Failure { .. } => return Reply::success(results, stream),
            Reply::Error { stream, message } => return Reply::Error { stream, message },
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::maybe;
    use crate::pure::{error, success};
    use crate::then::ThenExt;
    use crate::token::{any, satisfy, symbol};

    #[test]
    fn test_many_zero_matches() {
        let stream = Stream::from_text("xyz");
        let (results, rest) = many(symbol('a')).parse(stream.clone()).into_result().unwrap();
        assert_eq!(results, vec![]);
        assert!(rest.ptr_eq(&stream));
    }

    #[test]
    fn test_many_multiple_matches() {
        let (results, rest) = many(symbol('a'))
            .parse(Stream::from_text("aaabcd"))
            .into_result()
            .unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(rest.current(), Some('b'));
    }

    #[test]
    fn test_many_digits_to_end() {
        let digit = satisfy(|c: char| c.is_ascii_digit());
        let (digits, rest) = digit.many().parse(Stream::from_text("123")).into_result().unwrap();
        assert_eq!(digits, vec!['1', '2', '3']);
        assert!(rest.is_end());
        let end = rest.position();
        assert_eq!((end.line(), end.column(), end.index()), (1, 4, 3));
    }

    #[test]
    fn test_many_with_any() {
        let (results, rest) = many(any()).parse(Stream::from_text("hello")).into_result().unwrap();
        assert_eq!(results.into_iter().collect::<String>(), "hello");
        assert!(rest.is_end());
    }

    #[test]
    fn test_many_stops_at_partial_item() {
        // "ab" pairs; the trailing "a" starts a pair that cannot finish
        let pair = symbol('a').then(symbol('b'));
        let (pairs, rest) = many(pair).parse(Stream::from_text("ababa")).into_result().unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(rest.position().index(), 4);
    }

    #[test]
    fn test_many_propagates_error() {
        let parser = many(symbol('a').then(error::<char, char>("broken pair")));
        let reply = parser.parse(Stream::from_text("aa"));
        assert!(reply.is_error());
        assert_eq!(reply.message().unwrap().text(), "broken pair");
    }

    #[test]
    fn test_many_zero_width_terminates() {
        let reply = many(success::<char, _>(1)).parse(Stream::from_text("abc"));
        assert!(reply.is_error());
        assert_eq!(reply.position().index(), 0);

        let reply = many(maybe(symbol('x'))).parse(Stream::from_text("xxy"));
        assert!(reply.is_error());
        assert_eq!(reply.position().index(), 2);
    }

    #[test]
    fn test_many_empty_input() {
        let (results, rest) = many(symbol('a')).parse(Stream::from_text("")).into_result().unwrap();
        assert!(results.is_empty());
        assert!(rest.is_end());
    }
}
