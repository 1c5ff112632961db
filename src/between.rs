use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value
/// with the delimiters discarded.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
    P3: Parser<'code, Symbol = P1::Symbol>,
{
    type Symbol = P1::Symbol;
    type Output = P2::Output;

    fn parse(&self, stream: Stream<'code, P1::Symbol>) -> Reply<'code, P1::Symbol, P2::Output> {
        let (_, stream) = match self.open.parse(stream).into_success() {
            Ok(opened) => opened,
            Err(other) => return other,
        };
        let (value, stream) = match self.content.parse(stream).into_success() {
            Ok(content) => content,
            Err(other) => return other,
        };
        self.close.parse(stream).map(|_| value)
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Symbol = P1::Symbol>,
    P3: Parser<'code, Symbol = P1::Symbol>,
{
    Between::new(open, content, close)
}
