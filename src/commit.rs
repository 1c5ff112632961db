//! Commit and cut: errors that no alternative may recover from.
//!
//! [`fail_fast`] and [`commit`] raise an *escalation*, an `Error` reply
//! whose message is marked as escalated. Every combinator already returns
//! errors without trying further alternatives, so an escalation travels up
//! through enclosing `or`, `choice` and repetitions untouched. Unlike an
//! ordinary error it also passes through [`attempt`](crate::attempt::attempt).
//! It stops at the nearest [`boundary`] or at [`run`](crate::run::run),
//! which settle it into an ordinary error with the same message and stream.

use crate::parser::Parser;
use crate::reply::{ErrorMessage, Reply};
use crate::stream::Stream;
use crate::symbol::Symbol;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that aborts every pending alternative with a message
pub struct FailFast<S, T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> (S, T)>,
}

impl<'code, S: Symbol, T> Parser<'code> for FailFast<S, T> {
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        Reply::Error {
            stream,
            message: ErrorMessage::escalation(self.message.clone()),
        }
    }
}

/// Convenience function to create a FailFast parser
pub fn fail_fast<S: Symbol, T>(message: impl Into<Cow<'static, str>>) -> FailFast<S, T> {
    FailFast {
        message: message.into(),
        _phantom: PhantomData,
    }
}

/// Parser combinator that escalates a failure of the given parser
///
/// Use after the input has singled out one alternative: once a keyword has
/// matched, a malformed rest should be reported rather than retried as
/// something else. The escalation is raised at the stream the parser
/// started from.
pub struct Commit<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Commit<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Commit {
            parser,
            message: message.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Commit<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        match self.parser.parse(stream.clone()) {
            Reply::Failure { .. } => Reply::Error {
                stream,
                message: ErrorMessage::escalation(self.message.clone()),
            },
            reply => reply,
        }
    }
}

/// Convenience function to create a Commit parser
pub fn commit<'code, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Commit<P>
where
    P: Parser<'code>,
{
    Commit::new(parser, message)
}

/// Parser combinator that stops escalations raised inside it
///
/// An escalation from the given parser is returned as an ordinary error,
/// so alternatives outside the boundary behave as they would for any
/// other error.
pub struct Boundary<P> {
    parser: P,
}

impl<P> Boundary<P> {
    pub fn new(parser: P) -> Self {
        Boundary { parser }
    }
}

impl<'code, P> Parser<'code> for Boundary<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, P::Output> {
        settle(self.parser.parse(stream))
    }
}

/// Convenience function to create a Boundary parser
pub fn boundary<'code, P>(parser: P) -> Boundary<P>
where
    P: Parser<'code>,
{
    Boundary::new(parser)
}

/// Turn an escalation into an ordinary error; other replies pass through
pub(crate) fn settle<'code, S: Symbol, T>(reply: Reply<'code, S, T>) -> Reply<'code, S, T> {
    match reply {
        Reply::Error { stream, message } if message.is_escalated() => {
            tracing::debug!(
                position = %stream.position(),
                message = message.text(),
                "intercepted escalation"
            );
            Reply::Error {
                stream,
                message: message.settle(),
            }
        }
        reply => reply,
    }
}

/// Extension trait to add .commit() and .boundary() method support for parsers
pub trait CommitExt<'code>: Parser<'code> + Sized {
    fn commit(self, message: impl Into<Cow<'static, str>>) -> Commit<Self> {
        Commit::new(self, message)
    }

    fn boundary(self) -> Boundary<Self> {
        Boundary::new(self)
    }
}

/// Implement CommitExt for all parsers
impl<'code, P> CommitExt<'code> for P where P: Parser<'code> {}
