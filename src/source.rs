use crate::symbol::Symbol;
use std::io::{self, BufRead};

/// A pull interface over raw input
///
/// Sources hand out symbols in order and never revisit them; all rewinding
/// happens above the [`LookaheadBuffer`](crate::buffer::LookaheadBuffer).
pub trait Source {
    /// The type of symbols this source yields
    type Symbol: Symbol;

    /// Append at most `max` symbols to `into`, returning how many were appended
    ///
    /// Returning 0 signals that the source is exhausted.
    fn pull(&mut self, max: usize, into: &mut Vec<Self::Symbol>) -> usize;
}

/// Lend a source to a stream while keeping it for inspection afterwards
impl<T: Source + ?Sized> Source for &mut T {
    type Symbol = T::Symbol;

    fn pull(&mut self, max: usize, into: &mut Vec<Self::Symbol>) -> usize {
        (**self).pull(max, into)
    }
}

/// A source over any iterator of symbols: `str::chars`, copied slices, vectors
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        IterSource {
            iter: iter.into_iter(),
        }
    }
}

impl<I> Source for IterSource<I>
where
    I: Iterator,
    I::Item: Symbol,
{
    type Symbol = I::Item;

    fn pull(&mut self, max: usize, into: &mut Vec<Self::Symbol>) -> usize {
        let before = into.len();
        into.extend(self.iter.by_ref().take(max));
        into.len() - before
    }
}

/// A source decoding UTF-8 characters from a buffered reader, one line at a time
///
/// A read failure (an I/O error or invalid UTF-8) ends the input and is kept
/// in the source. Lend the source with `Stream::new(&mut source)` and check
/// [`ReadSource::error`] after parsing to tell a failed read from a real end
/// of input.
pub struct ReadSource<R> {
    reader: R,
    line: String,
    pending: Vec<char>,
    offset: usize,
    done: bool,
    error: Option<io::Error>,
}

impl<R: BufRead> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        ReadSource {
            reader,
            line: String::new(),
            pending: Vec::new(),
            offset: 0,
            done: false,
            error: None,
        }
    }

    /// The read failure that ended the input, if any
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn refill(&mut self) -> bool {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => false,
            Ok(_) => {
                self.pending.clear();
                self.pending.extend(self.line.chars());
                self.offset = 0;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "source read failed, ending input");
                self.error = Some(error);
                false
            }
        }
    }
}

impl<R: BufRead> Source for ReadSource<R> {
    type Symbol = char;

    fn pull(&mut self, max: usize, into: &mut Vec<char>) -> usize {
        let mut pulled = 0;
        while pulled < max && !self.done {
            if self.offset == self.pending.len() && !self.refill() {
                self.done = true;
                break;
            }
            let available = &self.pending[self.offset..];
            let take = available.len().min(max - pulled);
            into.extend_from_slice(&available[..take]);
            self.offset += take;
            pulled += take;
        }
        pulled
    }
}
