use crate::commit::settle;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Invoke a parser at the top level
///
/// Escalations that reach this point are settled into ordinary errors
/// carrying the same message and residual stream, so the caller always
/// gets a plain three-way reply back.
pub fn run<'code, P>(
    parser: &P,
    stream: Stream<'code, P::Symbol>,
) -> Reply<'code, P::Symbol, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    settle(parser.parse(stream))
}

/// Invoke a parser at the top level and convert the outcome to a `Result`
///
/// A failure is reported as [`ParseError::NoMatch`] at the position parsing
/// started from; an error keeps its message and the position where it
/// was raised.
pub fn parse<'code, P>(
    parser: &P,
    stream: Stream<'code, P::Symbol>,
) -> Result<(P::Output, Stream<'code, P::Symbol>), ParseError>
where
    P: Parser<'code> + ?Sized,
{
    let start = stream.position();
    match run(parser, stream) {
        Reply::Failure { .. } => Err(ParseError::NoMatch { position: start }),
        reply => reply.into_result(),
    }
}

/// Extension trait to add .run() method support for parsers
pub trait RunExt<'code>: Parser<'code> {
    fn run(&self, stream: Stream<'code, Self::Symbol>) -> Reply<'code, Self::Symbol, Self::Output> {
        run(self, stream)
    }
}

/// Implement RunExt for all parsers
impl<'code, P> RunExt<'code> for P where P: Parser<'code> + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::fail_fast;
    use crate::or::OrExt;
    use crate::then::ThenExt;
    use crate::token::{end, symbol, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_success() {
        let (value, rest) = run(&text("ok"), Stream::from_text("ok")).into_result().unwrap();
        assert_eq!(value, "ok");
        assert!(rest.is_end());
    }

    #[test]
    fn test_run_settles_escalation() {
        let parser = symbol('a')
            .ignore_then(fail_fast::<char, char>("cut after a"))
            .or(symbol('a'));
        let reply = parser.run(Stream::from_text("ab"));
        assert!(reply.is_error());
        assert!(!reply.is_escalation());
        assert_eq!(reply.message().unwrap().text(), "cut after a");
        assert_eq!(reply.position().index(), 1);
    }

    #[test]
    fn test_parse_no_match_at_start() {
        let parser = symbol('a').then(symbol('b'));
        let stream = Stream::from_text("x\nab").consume().consume();
        assert_eq!(stream.position().line(), 2);

        let error = parse(&parser, stream.consume()).unwrap_err();
        assert_eq!(error, ParseError::NoMatch { position: stream.consume().position() });
        assert_eq!(error.to_string(), "2:2: no alternative matched");
    }

    #[test]
    fn test_parse_reports_error_position() {
        let parser = symbol('a').then(fail_fast::<char, ()>("expected end"));
        let error = parse(&parser, Stream::from_text("ab")).unwrap_err();
        assert_eq!(error.to_string(), "1:2: expected end");
    }

    #[test]
    fn test_parse_whole_input() {
        let parser = text("abc").then_ignore(end());
        assert!(parse(&parser, Stream::from_text("abc")).is_ok());
        assert!(parse(&parser, Stream::from_text("abcd")).is_err());
    }
}
