use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that tries alternatives in order and takes the first success
///
/// Every alternative gets the original stream. Only a Failure moves on to
/// the next alternative: the first Error ends the choice, so a grammar can
/// commit to an alternative by reporting an error from it. When every
/// alternative fails the choice fails at the original stream.
pub struct Choice<P> {
    alternatives: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(alternatives: Vec<P>) -> Self {
        Choice { alternatives }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        for alternative in &self.alternatives {
            match alternative.parse(stream.clone()) {
                Reply::Failure { .. } => continue,
                reply => return reply,
            }
        }
        Reply::failure(stream)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(alternatives: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(alternatives.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::BoxedExt;
    use crate::pure::error;
    use crate::token::{symbol, text};

    #[test]
    fn test_choice_first_success_wins() {
        let parser = choice(vec![text("let"), text("le"), text("l")]);
        let (matched, rest) = parser.parse(Stream::from_text("lex")).into_result().unwrap();
        assert_eq!(matched, "le");
        assert_eq!(rest.current(), Some('x'));
    }

    #[test]
    fn test_choice_all_fail_at_original_stream() {
        let stream = Stream::from_text("zzz");
        let reply = choice(vec![text("ab"), text("zy")]).parse(stream.clone());
        assert!(reply.is_failure());
        assert!(reply.stream().ptr_eq(&stream));
    }

    #[test]
    fn test_choice_error_aborts() {
        let parser = choice(vec![
            symbol('x').boxed(),
            error("committed").boxed(),
            symbol('a').boxed(),
        ]);
        let reply = parser.parse(Stream::from_text("a"));
        assert!(reply.is_error());
        assert_eq!(reply.message().unwrap().text(), "committed");
    }

    #[test]
    fn test_empty_choice_fails() {
        let reply = choice(Vec::<crate::token::Any<char>>::new()).parse(Stream::from_text("a"));
        assert!(reply.is_failure());
    }
}
