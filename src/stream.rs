use crate::buffer::LookaheadBuffer;
use crate::delayed::Delayed;
use crate::position::Position;
use crate::source::{IterSource, Source};
use crate::symbol::Symbol;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type SharedBuffer<'code, S> = Rc<RefCell<LookaheadBuffer<'code, S>>>;

/// An immutable, position-tracked view of the input at one symbol.
///
/// Streams are cheap to clone and never change: [`Stream::consume`] returns
/// the successor instead of advancing in place, so any earlier stream can be
/// handed to another alternative to rewind for free. Successors are computed
/// on first demand and cached, which means the underlying source is read
/// exactly once per symbol however many alternatives revisit a node.
pub struct Stream<'code, S: Symbol> {
    node: Rc<Node<'code, S>>,
}

struct Node<'code, S: Symbol> {
    current: Option<S>,
    position: Position,
    /// `None` on the terminal node, whose successor is itself
    successor: Option<Delayed<'code, Stream<'code, S>>>,
}

impl<'code, S: Symbol> Stream<'code, S> {
    /// Create a stream over a source, starting at line 1, column 1
    pub fn new(source: impl Source<Symbol = S> + 'code) -> Self {
        Self::with_position(source, Position::START)
    }

    /// Create a stream over a source, starting at the given position
    pub fn with_position(source: impl Source<Symbol = S> + 'code, position: Position) -> Self {
        Self::from_buffer(LookaheadBuffer::new(source), position)
    }

    /// Create a stream over an already configured lookahead buffer
    pub fn from_buffer(buffer: LookaheadBuffer<'code, S>, position: Position) -> Self {
        Self::at(Rc::new(RefCell::new(buffer)), position)
    }

    /// Create a stream over a slice of symbols
    pub fn from_slice(symbols: &'code [S]) -> Self {
        Self::new(IterSource::new(symbols.iter().copied()))
    }

    /// The symbol at this position, or `None` at end of input
    pub fn current(&self) -> Option<S> {
        self.node.current
    }

    pub fn position(&self) -> Position {
        self.node.position
    }

    pub fn is_end(&self) -> bool {
        self.node.current.is_none()
    }

    /// The stream one symbol further on
    ///
    /// Consuming the same stream twice yields the same successor. At end of
    /// input this returns the stream itself.
    pub fn consume(&self) -> Self {
        match &self.node.successor {
            Some(successor) => successor.force().clone(),
            None => self.clone(),
        }
    }

    /// Whether two streams are the same node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    fn at(buffer: SharedBuffer<'code, S>, position: Position) -> Self {
        let current = buffer.borrow_mut().fetch(1);
        let successor = current.map(|symbol| {
            let buffer = Rc::clone(&buffer);
            Delayed::new(move || Self::advance(buffer, symbol, position))
        });
        Stream {
            node: Rc::new(Node {
                current,
                position,
                successor,
            }),
        }
    }

    /// Step past `symbol`, which is the next unread symbol in `buffer`
    fn advance(buffer: SharedBuffer<'code, S>, symbol: S, position: Position) -> Self {
        let following = {
            let mut staged = buffer.borrow_mut();
            let following = staged.fetch(2);
            staged.skip(1);
            following
        };

        let ends_line = symbol.is_line_feed()
            || (symbol.is_carriage_return() && !following.is_some_and(Symbol::is_line_feed));
        let position = if ends_line {
            position.next_line()
        } else {
            position.next_column()
        };

        Self::at(buffer, position)
    }
}

impl<'code> Stream<'code, char> {
    /// Create a character stream over a string
    pub fn from_text(text: &'code str) -> Self {
        Self::new(IterSource::new(text.chars()))
    }
}

impl<S: Symbol> Clone for Stream<'_, S> {
    fn clone(&self) -> Self {
        Stream {
            node: Rc::clone(&self.node),
        }
    }
}

impl<S: Symbol> fmt::Debug for Stream<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("current", &self.node.current)
            .field("position", &self.node.position)
            .finish()
    }
}

// Unlink forced successors iteratively so dropping a long chain does not recurse.
impl<S: Symbol> Drop for Node<'_, S> {
    fn drop(&mut self) {
        let mut next = self.successor.as_mut().and_then(Delayed::take);
        while let Some(stream) = next {
            next = match Rc::try_unwrap(stream.node) {
                Ok(mut node) => node.successor.as_mut().and_then(Delayed::take),
                Err(_) => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn walk(stream: &Stream<'_, char>) -> Vec<(usize, usize, usize)> {
        let mut positions = Vec::new();
        let mut stream = stream.clone();
        loop {
            let p = stream.position();
            positions.push((p.line(), p.column(), p.index()));
            if stream.is_end() {
                return positions;
            }
            stream = stream.consume();
        }
    }

    #[test]
    fn test_current_and_consume() {
        let stream = Stream::from_text("ab");
        assert_eq!(stream.current(), Some('a'));

        let stream = stream.consume();
        assert_eq!(stream.current(), Some('b'));

        let stream = stream.consume();
        assert!(stream.is_end());
        assert_eq!(stream.current(), None);
    }

    #[test]
    fn test_empty_input_is_terminal() {
        let stream = Stream::from_text("");
        assert!(stream.is_end());
        assert_eq!(stream.position(), Position::START);
        assert!(stream.consume().ptr_eq(&stream));
    }

    #[test]
    fn test_terminal_consume_is_noop() {
        let end = Stream::from_text("x").consume();
        let again = end.consume();
        assert!(again.ptr_eq(&end));
        assert_eq!(again.position().index(), 1);
    }

    #[test]
    fn test_consume_is_memoized() {
        let stream = Stream::from_text("abc");
        let first = stream.consume();
        let second = stream.consume();
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn test_line_feed_positions() {
        let stream = Stream::from_text("ab\ncd");
        assert_eq!(
            walk(&stream),
            vec![(1, 1, 0), (1, 2, 1), (1, 3, 2), (2, 1, 3), (2, 2, 4), (2, 3, 5)]
        );
    }

    #[test]
    fn test_crlf_counts_as_one_line_break() {
        let stream = Stream::from_text("a\r\nb");
        assert_eq!(walk(&stream), vec![(1, 1, 0), (1, 2, 1), (1, 3, 2), (2, 1, 3), (2, 2, 4)]);
    }

    #[test]
    fn test_lone_carriage_return_breaks_line() {
        let stream = Stream::from_text("a\rb\r");
        assert_eq!(walk(&stream), vec![(1, 1, 0), (1, 2, 1), (2, 1, 2), (2, 2, 3), (3, 1, 4)]);
    }

    #[test]
    fn test_custom_start_position() {
        let start = Position::new(10, 5, 100).unwrap();
        let stream = Stream::with_position(IterSource::new("x\ny".chars()), start);
        assert_eq!(walk(&stream), vec![(10, 5, 100), (10, 6, 101), (11, 1, 102), (11, 2, 103)]);
    }

    #[test]
    fn test_byte_stream() {
        let stream = Stream::from_slice(b"a\nb");
        assert_eq!(stream.current(), Some(b'a'));
        let stream = stream.consume().consume();
        assert_eq!(stream.current(), Some(b'b'));
        assert_eq!(stream.position().line(), 2);
    }

    #[test]
    fn test_rewind_reads_source_once() {
        let reads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&reads);
        let text: Vec<char> = "rewind me".chars().collect();
        let source = IterSource::new(text.into_iter().inspect(move |_| {
            counter.set(counter.get() + 1);
        }));
        let start = Stream::new(source);

        for _ in 0..3 {
            let mut stream = start.clone();
            while !stream.is_end() {
                stream = stream.consume();
            }
        }
        assert_eq!(reads.get(), 9);
    }

    #[test]
    fn test_small_buffer_capacity() {
        let buffer = LookaheadBuffer::with_capacity(IterSource::new("a\r\nb".chars()), 1);
        let stream = Stream::from_buffer(buffer, Position::START);
        assert_eq!(walk(&stream), vec![(1, 1, 0), (1, 2, 1), (1, 3, 2), (2, 1, 3), (2, 2, 4)]);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let text = "x".repeat(200_000);
        let start = Stream::from_text(&text);
        let mut stream = start.clone();
        while !stream.is_end() {
            stream = stream.consume();
        }
        drop(stream);
        drop(start);
    }

    /// Expected final position using plain string splitting on `\r\n`, `\n` and `\r`
    fn expected_end(text: &str) -> (usize, usize, usize) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let line = 1 + normalized.matches('\n').count();
        let last = normalized.rsplit('\n').next().unwrap_or("");
        (line, 1 + last.chars().count(), text.chars().count())
    }

    proptest! {
        #[test]
        fn index_advances_by_one(text in "[a-z\r\n]{0,64}") {
            let positions = walk(&Stream::from_text(&text));
            for (i, (_, _, index)) in positions.iter().enumerate() {
                prop_assert_eq!(*index, i);
            }
        }

        #[test]
        fn end_position_matches_line_split(text in "[ab\r\n]{0,64}") {
            let positions = walk(&Stream::from_text(&text));
            let end = *positions.last().unwrap();
            prop_assert_eq!(end, expected_end(&text));
        }

        #[test]
        fn positions_independent_of_capacity(text in "[xy\r\n]{0,32}", capacity in 1usize..6) {
            let buffer = LookaheadBuffer::with_capacity(IterSource::new(text.chars()), capacity);
            let small = walk(&Stream::from_buffer(buffer, Position::START));
            prop_assert_eq!(small, walk(&Stream::from_text(&text)));
        }
    }
}
