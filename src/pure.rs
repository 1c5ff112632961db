//! Parsers that produce a fixed outcome without consuming input.

use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::symbol::Symbol;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value, consuming nothing
pub struct Success<S, T> {
    value: T,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, T> Success<S, T> {
    pub fn new(value: T) -> Self {
        Success {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<'code, S: Symbol, T: Clone> Parser<'code> for Success<S, T> {
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        Reply::success(self.value.clone(), stream)
    }
}

/// Convenience function to create a Success parser
pub fn success<S: Symbol, T: Clone>(value: T) -> Success<S, T> {
    Success::new(value)
}

/// Parser that always fails without consuming input
pub struct Failure<S, T> {
    _phantom: PhantomData<fn() -> (S, T)>,
}

impl<'code, S: Symbol, T> Parser<'code> for Failure<S, T> {
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        Reply::failure(stream)
    }
}

/// Convenience function to create a Failure parser
pub fn failure<S: Symbol, T>() -> Failure<S, T> {
    Failure {
        _phantom: PhantomData,
    }
}

/// Parser that always reports an ordinary error with a fixed message
pub struct Fail<S, T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> (S, T)>,
}

impl<'code, S: Symbol, T> Parser<'code> for Fail<S, T> {
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        Reply::error(stream, self.message.clone())
    }
}

/// Convenience function to create a Fail parser
///
/// The error is ordinary: `or` and `choice` do not retry past it, but
/// [`attempt`](crate::attempt::attempt) can turn it back into a failure.
pub fn error<S: Symbol, T>(message: impl Into<Cow<'static, str>>) -> Fail<S, T> {
    Fail {
        message: message.into(),
        _phantom: PhantomData,
    }
}
