use crate::reply::Reply;
use crate::stream::Stream;
use crate::symbol::Symbol;
use std::marker::PhantomData;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a stream to a [`Reply`]: it must not
/// depend on or mutate anything but the stream it is handed, so that the
/// same parser can be retried on an earlier stream by any alternative.
pub trait Parser<'code> {
    /// The type of symbols this parser consumes
    type Symbol: Symbol;
    type Output;

    /// Attempt to parse at the given stream
    ///
    /// A `Failure` should hand back a stream at or before the point of
    /// mismatch; it never needs to restore the caller's stream, since
    /// streams are immutable.
    fn parse(&self, stream: Stream<'code, Self::Symbol>)
    -> Reply<'code, Self::Symbol, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(
        &self,
        stream: Stream<'code, Self::Symbol>,
    ) -> Reply<'code, Self::Symbol, Self::Output> {
        (**self).parse(stream)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(
        &self,
        stream: Stream<'code, Self::Symbol>,
    ) -> Reply<'code, Self::Symbol, Self::Output> {
        (**self).parse(stream)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Symbol = P::Symbol;
    type Output = P::Output;

    fn parse(
        &self,
        stream: Stream<'code, Self::Symbol>,
    ) -> Reply<'code, Self::Symbol, Self::Output> {
        (**self).parse(stream)
    }
}

/// A parser backed by a plain function or closure
pub struct FnParser<F, S, T> {
    f: F,
    _phantom: PhantomData<fn() -> (S, T)>,
}

impl<F, S, T> FnParser<F, S, T> {
    pub fn new(f: F) -> Self {
        FnParser {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<'code, F, S, T> Parser<'code> for FnParser<F, S, T>
where
    S: Symbol,
    F: Fn(Stream<'code, S>) -> Reply<'code, S, T>,
{
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        (self.f)(stream)
    }
}

/// Wrap a function from stream to reply as a parser
pub fn parser_fn<'code, F, S, T>(f: F) -> FnParser<F, S, T>
where
    S: Symbol,
    F: Fn(Stream<'code, S>) -> Reply<'code, S, T>,
{
    FnParser::new(f)
}
