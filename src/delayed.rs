use std::cell::{Cell, OnceCell};
use std::fmt;

type Thunk<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// A value computed at most once, on first demand, then cached.
///
/// Every call to [`Delayed::force`] after the first returns the same value
/// without running the computation again.
pub struct Delayed<'a, T> {
    value: OnceCell<T>,
    thunk: Cell<Option<Thunk<'a, T>>>,
}

impl<'a, T> Delayed<'a, T> {
    /// Create a delayed value from the computation that produces it
    pub fn new(thunk: impl FnOnce() -> T + 'a) -> Self {
        Delayed {
            value: OnceCell::new(),
            thunk: Cell::new(Some(Box::new(thunk))),
        }
    }

    /// Create an already-computed delayed value
    pub fn ready(value: T) -> Self {
        Delayed {
            value: OnceCell::from(value),
            thunk: Cell::new(None),
        }
    }

    /// Run the computation if it has not run yet and return the cached value
    ///
    /// # Panics
    /// Panics if the computation forces the same value re-entrantly.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| match self.thunk.take() {
            Some(thunk) => thunk(),
            None => panic!("delayed value forced while it was being computed"),
        })
    }

    /// Whether the value has been computed
    pub fn is_forced(&self) -> bool {
        self.value.get().is_some()
    }

    /// Remove the cached value, if any
    pub(crate) fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: fmt::Debug> fmt::Debug for Delayed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Delayed").field(value).finish(),
            None => f.write_str("Delayed(<pending>)"),
        }
    }
}
