use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that turns an ordinary error back into a backtrackable failure
///
/// The failure is reported at the stream the parser started from. An
/// escalation raised by [`fail_fast`](crate::commit::fail_fast) passes
/// through untouched.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        match self.parser.parse(stream.clone()) {
            Reply::Error { message, .. } if !message.is_escalated() => Reply::failure(stream),
            reply => reply,
        }
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::fail_fast;
    use crate::label::LabelExt;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::then::ThenExt;
    use crate::token::{symbol, text};

    fn arrow<'code>() -> impl Parser<'code, Symbol = char, Output = &'static str> {
        symbol('-').then(symbol('>').label("expected '>'")).map(|_| "arrow")
    }

    fn minus<'code>() -> impl Parser<'code, Symbol = char, Output = &'static str> {
        symbol('-').map(|_| "minus")
    }

    #[test]
    fn test_attempt_recovers_error() {
        // Without attempt the error stops the alternative
        assert!(arrow().or(minus()).parse(Stream::from_text("-1")).is_error());

        let parser = attempt(arrow()).or(minus());
        let (token, rest) = parser.parse(Stream::from_text("-1")).into_result().unwrap();
        assert_eq!(token, "minus");
        assert_eq!(rest.current(), Some('1'));

        assert_eq!(parser.parse(Stream::from_text("->")).ok(), Some("arrow"));
    }

    #[test]
    fn test_attempt_leaves_escalation() {
        let parser = text("if").ignore_then(fail_fast::<char, ()>("bad if")).attempt();
        let reply = parser.parse(Stream::from_text("if"));
        assert!(reply.is_escalation());
    }

    #[test]
    fn test_attempt_failure_at_start() {
        let stream = Stream::from_text("ab");
        let reply = symbol('a')
            .then(symbol('x').label("expected x"))
            .attempt()
            .parse(stream.clone());
        assert!(reply.is_failure());
        assert!(reply.stream().ptr_eq(&stream));
    }
}
