//! Primitive symbol-matching parsers.
//!
//! A thin adapter layer over [`Stream`]: every parser here either consumes
//! the symbols it matched or fails at the stream it was handed.

use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::symbol::Symbol;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes and returns any single symbol
pub struct Any<S> {
    _phantom: PhantomData<fn() -> S>,
}

/// Convenience function to create an Any parser
pub fn any<S: Symbol>() -> Any<S> {
    Any {
        _phantom: PhantomData,
    }
}

impl<'code, S: Symbol> Parser<'code> for Any<S> {
    type Symbol = S;
    type Output = S;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, S> {
        match stream.current() {
            Some(symbol) => Reply::success(symbol, stream.consume()),
            None => Reply::failure(stream),
        }
    }
}

/// Parser that matches a single symbol satisfying a predicate
pub struct Satisfy<S, F> {
    predicate: F,
    _phantom: PhantomData<fn() -> S>,
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<S, F>(predicate: F) -> Satisfy<S, F>
where
    S: Symbol,
    F: Fn(S) -> bool,
{
    Satisfy {
        predicate,
        _phantom: PhantomData,
    }
}

impl<'code, S, F> Parser<'code> for Satisfy<S, F>
where
    S: Symbol,
    F: Fn(S) -> bool,
{
    type Symbol = S;
    type Output = S;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, S> {
        match stream.current() {
            Some(symbol) if (self.predicate)(symbol) => Reply::success(symbol, stream.consume()),
            _ => Reply::failure(stream),
        }
    }
}

/// Parser that matches a specific symbol
pub struct IsSymbol<S> {
    expected: S,
}

/// Convenience function to create an IsSymbol parser
pub fn symbol<S: Symbol>(expected: S) -> IsSymbol<S> {
    IsSymbol { expected }
}

impl<'code, S: Symbol> Parser<'code> for IsSymbol<S> {
    type Symbol = S;
    type Output = S;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, S> {
        match stream.current() {
            Some(symbol) if symbol == self.expected => Reply::success(symbol, stream.consume()),
            _ => Reply::failure(stream),
        }
    }
}

/// Walk `expected` symbol by symbol; `None` on the first mismatch
fn match_run<'code, S: Symbol>(
    mut stream: Stream<'code, S>,
    expected: impl IntoIterator<Item = S>,
) -> Option<Stream<'code, S>> {
    for want in expected {
        if stream.current() != Some(want) {
            return None;
        }
        stream = stream.consume();
    }
    Some(stream)
}

/// Parser that matches an exact run of symbols
pub struct Literal<S> {
    expected: Vec<S>,
}

/// Convenience function to create a Literal parser
pub fn literal<S: Symbol>(expected: impl IntoIterator<Item = S>) -> Literal<S> {
    Literal {
        expected: expected.into_iter().collect(),
    }
}

impl<'code, S: Symbol> Parser<'code> for Literal<S> {
    type Symbol = S;
    type Output = Vec<S>;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, Vec<S>> {
        match match_run(stream.clone(), self.expected.iter().copied()) {
            Some(rest) => Reply::success(self.expected.clone(), rest),
            None => Reply::failure(stream),
        }
    }
}

/// Parser that matches an exact string character by character
pub struct Text {
    expected: Cow<'static, str>,
}

/// Convenience function to create a Text parser
pub fn text(expected: impl Into<Cow<'static, str>>) -> Text {
    Text {
        expected: expected.into(),
    }
}

impl<'code> Parser<'code> for Text {
    type Symbol = char;
    type Output = Cow<'static, str>;

    fn parse(&self, stream: Stream<'code, char>) -> Reply<'code, char, Self::Output> {
        match match_run(stream.clone(), self.expected.chars()) {
            Some(rest) => Reply::success(self.expected.clone(), rest),
            None => Reply::failure(stream),
        }
    }
}

/// Parser that succeeds only at end of input
pub struct End<S> {
    _phantom: PhantomData<fn() -> S>,
}

/// Convenience function to create an End parser
pub fn end<S: Symbol>() -> End<S> {
    End {
        _phantom: PhantomData,
    }
}

impl<'code, S: Symbol> Parser<'code> for End<S> {
    type Symbol = S;
    type Output = ();

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, ()> {
        if stream.is_end() {
            Reply::success((), stream)
        } else {
            Reply::failure(stream)
        }
    }
}
