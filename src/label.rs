use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that turns a failure into an error with a message
///
/// The error is reported at the stream the parser started from. It is an
/// ordinary error: enclosing alternatives stop at it, and
/// [`attempt`](crate::attempt::attempt) can turn it back into a failure.
/// Errors from the inner parser keep their own message.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            message: message.into(),
        }
    }
}

impl<P> fmt::Debug for Label<P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("parser", &self.parser)
            .field("message", &self.message)
            .finish()
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        match self.parser.parse(stream.clone()) {
            Reply::Failure { .. } => Reply::error(stream, self.message.clone()),
            reply => reply,
        }
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, message)
}
