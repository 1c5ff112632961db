use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::symbol::Symbol;
use std::rc::Rc;

type DynParser<'code, S, T> = dyn Parser<'code, Symbol = S, Output = T> + 'code;

/// A type-erased, cheaply clonable parser
///
/// Useful for grammar functions that return parsers, heterogeneous
/// alternatives in [`choice`](crate::choice::choice), and recursive grammars.
pub struct BoxedParser<'code, S: Symbol, T> {
    parser: Rc<DynParser<'code, S, T>>,
}

impl<'code, S: Symbol, T> BoxedParser<'code, S, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Symbol = S, Output = T> + 'code,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<S: Symbol, T> Clone for BoxedParser<'_, S, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'code, S: Symbol, T> Parser<'code> for BoxedParser<'code, S, T> {
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        self.parser.parse(stream)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Symbol, Self::Output> {
        BoxedParser::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
