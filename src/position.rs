use crate::error::InvalidArgument;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use std::cmp::Ordering;
use std::fmt;

/// A location in the input: 1-based line and column, 0-based symbol index.
///
/// Positions handed out by one stream are ordered by `index`; line and
/// column follow from the index for positions of the same stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    line: usize,
    column: usize,
    index: usize,
}

impl Position {
    /// The start of an input: line 1, column 1, index 0
    pub const START: Position = Position {
        line: 1,
        column: 1,
        index: 0,
    };

    pub fn new(line: usize, column: usize, index: usize) -> Result<Self, InvalidArgument> {
        if line < 1 {
            return Err(InvalidArgument::Line(line));
        }
        if column < 1 {
            return Err(InvalidArgument::Column(column));
        }
        Ok(Position {
            line,
            column,
            index,
        })
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn next_column(self) -> Self {
        Position {
            line: self.line,
            column: self.column + 1,
            index: self.index + 1,
        }
    }

    pub(crate) fn next_line(self) -> Self {
        Position {
            line: self.line + 1,
            column: 1,
            index: self.index + 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The stretch of input a parser consumed, from `start` (inclusive) to `end` (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Number of symbols covered by the span
    pub fn len(&self) -> usize {
        self.end.index - self.start.index
    }

    pub fn is_empty(&self) -> bool {
        self.start.index == self.end.index
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Symbol = P::Symbol;
    type Output = (P::Output, Span);

    fn parse(
        &self,
        stream: Stream<'code, Self::Symbol>,
    ) -> Reply<'code, Self::Symbol, Self::Output> {
        let start = stream.position();
        self.parser.parse(stream).and_then(|value, rest| {
            let span = Span::new(start, rest.position());
            Reply::success((value, span), rest)
        })
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpannedExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture the span it consumed
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpannedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned combinator
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}
