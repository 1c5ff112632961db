use crate::many::collect_into;
use crate::parser::Parser;
use crate::repeat::Repeat;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that matches at least `minimum` occurrences of the given parser
///
/// The first `minimum` repetitions behave like [`Repeat`]; the rest like
/// [`Many`](crate::many::Many), including its zero-width guard.
pub struct AtLeast<P> {
    parser: P,
    minimum: usize,
}

impl<P> AtLeast<P> {
    pub fn new(parser: P, minimum: usize) -> Self {
        AtLeast { parser, minimum }
    }
}

impl<'code, P> Parser<'code> for AtLeast<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, Vec<P::Output>> {
        Repeat::new(&self.parser, self.minimum)
            .parse(stream)
            .and_then(|head, rest| collect_into(&self.parser, rest, head))
    }
}

/// Convenience function to create an AtLeast parser
pub fn at_least<'code, P>(parser: P, minimum: usize) -> AtLeast<P>
where
    P: Parser<'code>,
{
    AtLeast::new(parser, minimum)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub fn some<'code, P>(parser: P) -> AtLeast<P>
where
    P: Parser<'code>,
{
    AtLeast::new(parser, 1)
}

/// Extension trait to add .at_least() and .some() method support for parsers
pub trait AtLeastExt<'code>: Parser<'code> + Sized {
    fn at_least(self, minimum: usize) -> AtLeast<Self> {
        AtLeast::new(self, minimum)
    }

    fn some(self) -> AtLeast<Self> {
        AtLeast::new(self, 1)
    }
}

/// Implement AtLeastExt for all parsers
impl<'code, P> AtLeastExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{satisfy, symbol};

    #[test]
    fn test_some_zero_matches_fails() {
        let reply = some(symbol('a')).parse(Stream::from_text("xyz"));
        assert!(reply.is_failure());
        assert_eq!(reply.position().index(), 0);
    }

    #[test]
    fn test_some_one_match() {
        let (results, rest) = some(symbol('a'))
            .parse(Stream::from_text("abc"))
            .into_result()
            .unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(rest.current(), Some('b'));
    }

    #[test]
    fn test_some_multiple_matches() {
        let (results, rest) = symbol('a')
            .some()
            .parse(Stream::from_text("aaab"))
            .into_result()
            .unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(rest.current(), Some('b'));
    }

    #[test]
    fn test_at_least_minimum_not_met() {
        let digits = satisfy(|c: char| c.is_ascii_digit()).at_least(3);
        let reply = digits.parse(Stream::from_text("12x"));
        assert!(reply.is_failure());
        assert_eq!(reply.position().index(), 2);
    }

    #[test]
    fn test_at_least_continues_past_minimum() {
        let digits = at_least(satisfy(|c: char| c.is_ascii_digit()), 2);
        let (values, rest) = digits.parse(Stream::from_text("12345")).into_result().unwrap();
        assert_eq!(values.len(), 5);
        assert!(rest.is_end());
    }

    #[test]
    fn test_at_least_zero_is_many() {
        let stream = Stream::from_text("b");
        let (values, rest) = at_least(symbol('a'), 0).parse(stream.clone()).into_result().unwrap();
        assert!(values.is_empty());
        assert!(rest.ptr_eq(&stream));
    }
}
