use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Monadic bind: run a parser, then the parser its value selects
///
/// On success the continuation is called with the value and the returned
/// parser runs on the residual stream. Failure and Error short-circuit
/// with their stream and message unchanged.
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Symbol = P::Symbol>,
{
    type Symbol = P::Symbol;
    type Output = Q::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, Q::Output> {
        self.parser
            .parse(stream)
            .and_then(|value, rest| (self.continuation)(value).parse(rest))
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Symbol = P::Symbol>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .and_then() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Symbol = Self::Symbol>,
    {
        Bind::new(self, continuation)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pure::success;
    use crate::repeat::repeat;
    use crate::token::{any, satisfy, symbol};

    #[test]
    fn test_bind_threads_stream() {
        let pair =
            any().and_then(|first: char| any().and_then(move |second| success((first, second))));
        let (value, rest) = pair.parse(Stream::from_text("xyz")).into_result().unwrap();
        assert_eq!(value, ('x', 'y'));
        assert_eq!(rest.current(), Some('z'));
    }

    #[test]
    fn test_bind_value_selects_parser() {
        // A digit says how many 'a's follow
        let counted = satisfy(|c: char| c.is_ascii_digit())
            .and_then(|c| repeat(symbol('a'), c.to_digit(10).unwrap_or(0) as usize));

        let (items, rest) = counted.parse(Stream::from_text("3aaab")).into_result().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(rest.current(), Some('b'));

        assert!(counted.parse(Stream::from_text("3aab")).is_failure());
    }

    #[test]
    fn test_bind_short_circuits_failure() {
        let stream = Stream::from_text("q");
        let reply = bind(symbol('a'), |_| -> crate::pure::Success<char, ()> {
            panic!("continuation must not run")
        })
        .parse(stream.clone());
        assert!(reply.is_failure());
        assert!(reply.stream().ptr_eq(&stream));
    }
}
