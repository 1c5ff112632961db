//! Staging window over a pull [`Source`].
//!
//! The buffer lets callers peek `k` symbols ahead without losing data and
//! without reading any source symbol twice. Consumed symbols are dropped
//! lazily: the window is compacted only when a lookahead request cannot be
//! served from what is already buffered.
//!
//! ```text
//! [consumed..., unread..., free...]
//!  0            ^cursor    ^filled  ^capacity
//! ```

use crate::error::InvalidArgument;
use crate::source::Source;
use crate::symbol::Symbol;

/// Lookahead window over one source, exclusively owned by stream construction
pub struct LookaheadBuffer<'code, S: Symbol> {
    source: Box<dyn Source<Symbol = S> + 'code>,
    /// Buffered symbols; `window.len()` is the filled count
    window: Vec<S>,
    /// Index of the next unread symbol in `window`
    cursor: usize,
    capacity: usize,
    exhausted: bool,
}

impl<'code, S: Symbol> LookaheadBuffer<'code, S> {
    pub const DEFAULT_CAPACITY: usize = 8;
    pub const MIN_CAPACITY: usize = 1;
    /// Deepest lookahead `peek` and `read` accept
    pub const MAX_LOOKAHEAD: usize = 1 << 20;

    pub fn new(source: impl Source<Symbol = S> + 'code) -> Self {
        Self::with_capacity(source, Self::DEFAULT_CAPACITY)
    }

    /// Create a buffer with an initial window size, clamped to [`Self::MIN_CAPACITY`]
    pub fn with_capacity(source: impl Source<Symbol = S> + 'code, capacity: usize) -> Self {
        let capacity = capacity.max(Self::MIN_CAPACITY);
        LookaheadBuffer {
            source: Box::new(source),
            window: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
            exhausted: false,
        }
    }

    /// Current window size; grows only when a lookahead deeper than it is requested
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of unread symbols already staged in the window
    pub fn buffered(&self) -> usize {
        self.window.len() - self.cursor
    }

    /// Return the `k`-th unread symbol (1-indexed) without consuming it
    ///
    /// `Ok(None)` signals end of source.
    pub fn peek(&mut self, k: usize) -> Result<Option<S>, InvalidArgument> {
        match k {
            0 => Err(InvalidArgument::ZeroLookahead),
            k if k > Self::MAX_LOOKAHEAD => Err(InvalidArgument::LookaheadTooDeep(k)),
            k => Ok(self.fetch(k)),
        }
    }

    /// Return the `k`-th unread symbol and advance past it
    ///
    /// The cursor moves only when that symbol exists.
    pub fn read(&mut self, k: usize) -> Result<Option<S>, InvalidArgument> {
        let symbol = self.peek(k)?;
        if symbol.is_some() {
            self.skip(k);
        }
        Ok(symbol)
    }

    /// Read up to the next line terminator, consuming but not returning it
    ///
    /// A carriage return followed by a line feed counts as one terminator.
    pub fn read_line(&mut self) -> Vec<S> {
        let mut line = Vec::new();
        while let Some(symbol) = self.fetch(1) {
            self.skip(1);
            if symbol.is_line_feed() {
                break;
            }
            if symbol.is_carriage_return() {
                if self.fetch(1).is_some_and(Symbol::is_line_feed) {
                    self.skip(1);
                }
                break;
            }
            line.push(symbol);
        }
        line
    }

    /// Read every remaining symbol
    pub fn read_to_end(&mut self) -> Vec<S> {
        let mut rest = Vec::new();
        while let Some(symbol) = self.fetch(1) {
            self.skip(1);
            rest.push(symbol);
        }
        rest
    }

    /// Peek without validating `k`; callers guarantee `1 <= k <= MAX_LOOKAHEAD`
    pub(crate) fn fetch(&mut self, k: usize) -> Option<S> {
        self.look_ahead(k);
        self.window.get(self.cursor + k - 1).copied()
    }

    /// Advance past `k` symbols that a previous `fetch(k)` showed to exist
    pub(crate) fn skip(&mut self, k: usize) {
        self.cursor = (self.cursor + k).min(self.window.len());
    }

    /// Guarantee that `k` unread symbols are staged unless the source runs dry
    fn look_ahead(&mut self, k: usize) {
        if self.buffered() >= k {
            return;
        }

        if self.cursor > 0 {
            self.window.drain(..self.cursor);
            self.cursor = 0;
        }

        if k > self.capacity {
            tracing::trace!(from = self.capacity, to = k, "growing lookahead window");
            self.window.reserve(k - self.window.len());
            self.capacity = k;
        }

        while !self.exhausted && self.window.len() < k {
            let want = self.capacity - self.window.len();
            if self.source.pull(want, &mut self.window) == 0 {
                tracing::trace!(buffered = self.window.len(), "source exhausted");
                self.exhausted = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::IterSource;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts every symbol the underlying iterator hands out
    fn counting(text: &str, reads: &Rc<Cell<usize>>) -> LookaheadBuffer<'static, char> {
        let reads = Rc::clone(reads);
        let chars: Vec<char> = text.chars().collect();
        LookaheadBuffer::new(IterSource::new(chars.into_iter().inspect(move |_| {
            reads.set(reads.get() + 1);
        })))
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut buffer = LookaheadBuffer::new(IterSource::new("abc".chars()));
        assert_eq!(buffer.peek(1), Ok(Some('a')));
        assert_eq!(buffer.peek(1), Ok(Some('a')));
        assert_eq!(buffer.peek(3), Ok(Some('c')));
        assert_eq!(buffer.peek(4), Ok(None));
    }

    #[test]
    fn test_read_advances_only_on_symbol() {
        let mut buffer = LookaheadBuffer::new(IterSource::new("ab".chars()));
        assert_eq!(buffer.read(1), Ok(Some('a')));
        assert_eq!(buffer.read(2), Ok(None));
        assert_eq!(buffer.read(1), Ok(Some('b')));
        assert_eq!(buffer.read(1), Ok(None));
    }

    #[test]
    fn test_zero_lookahead_rejected() {
        let mut buffer = LookaheadBuffer::new(IterSource::new("ab".chars()));
        assert_eq!(buffer.peek(0), Err(InvalidArgument::ZeroLookahead));
        assert_eq!(buffer.read(0), Err(InvalidArgument::ZeroLookahead));
        assert_eq!(buffer.peek(1), Ok(Some('a')));
    }

    #[test]
    fn test_excessive_lookahead_rejected() {
        let mut buffer = LookaheadBuffer::new(IterSource::new("ab".chars()));
        assert_eq!(
            buffer.peek(usize::MAX),
            Err(InvalidArgument::LookaheadTooDeep(usize::MAX))
        );
        assert_eq!(
            buffer.read(LookaheadBuffer::<char>::MAX_LOOKAHEAD + 1),
            Err(InvalidArgument::LookaheadTooDeep(
                LookaheadBuffer::<char>::MAX_LOOKAHEAD + 1
            ))
        );
        assert_eq!(buffer.capacity(), LookaheadBuffer::<char>::DEFAULT_CAPACITY);
        assert_eq!(buffer.read(1), Ok(Some('a')));
    }

    #[test]
    fn test_window_grows_only_past_capacity() {
        let mut buffer = LookaheadBuffer::with_capacity(IterSource::new("abcdefghij".chars()), 2);
        assert_eq!(buffer.capacity(), 2);

        assert_eq!(buffer.peek(2), Ok(Some('b')));
        assert_eq!(buffer.capacity(), 2);

        assert_eq!(buffer.peek(5), Ok(Some('e')));
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn test_capacity_clamped_to_minimum() {
        let buffer = LookaheadBuffer::with_capacity(IterSource::new("a".chars()), 0);
        assert_eq!(buffer.capacity(), LookaheadBuffer::<char>::MIN_CAPACITY);
    }

    #[test]
    fn test_compaction_keeps_unread_symbols() {
        let mut buffer = LookaheadBuffer::with_capacity(IterSource::new("abcdef".chars()), 3);
        assert_eq!(buffer.read(1), Ok(Some('a')));
        assert_eq!(buffer.read(1), Ok(Some('b')));
        assert_eq!(buffer.peek(3), Ok(Some('e')));
        assert_eq!(buffer.read_to_end(), vec!['c', 'd', 'e', 'f']);
    }

    #[test]
    fn test_each_symbol_pulled_once() {
        let reads = Rc::new(Cell::new(0));
        let mut buffer = counting("abcdefghijklmnop", &reads);

        for k in 1..=4 {
            buffer.peek(k).unwrap();
        }
        while buffer.read(1).unwrap().is_some() {
            buffer.peek(3).unwrap();
        }
        assert_eq!(reads.get(), 16);
    }

    #[test]
    fn test_read_line_terminators() {
        let mut buffer = LookaheadBuffer::new(IterSource::new("one\ntwo\r\nthree\rfour".chars()));
        assert_eq!(buffer.read_line(), vec!['o', 'n', 'e']);
        assert_eq!(buffer.read_line(), vec!['t', 'w', 'o']);
        assert_eq!(buffer.read_line(), vec!['t', 'h', 'r', 'e', 'e']);
        assert_eq!(buffer.read_line(), vec!['f', 'o', 'u', 'r']);
        assert_eq!(buffer.read_line(), Vec::<char>::new());
    }

    #[test]
    fn test_buffered_count() {
        let mut buffer = LookaheadBuffer::with_capacity(IterSource::new("abcd".chars()), 4);
        assert_eq!(buffer.buffered(), 0);
        buffer.peek(1).unwrap();
        assert_eq!(buffer.buffered(), 4);
        buffer.read(1).unwrap();
        assert_eq!(buffer.buffered(), 3);
    }
}
