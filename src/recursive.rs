//! Late-bound parsers for self-referential grammars.
//!
//! A grammar rule that refers to itself cannot capture itself by value, and
//! capturing an `Rc` of itself would leak the whole grammar. [`Recursive`]
//! owns the definition; the rule body refers back to it through a
//! [`RecursiveHandle`], which only holds a weak reference.

use crate::boxed::BoxedParser;
use crate::error::InvalidArgument;
use crate::parser::Parser;
use crate::reply::{ErrorMessage, Reply};
use crate::stream::Stream;
use crate::symbol::Symbol;
use std::cell::OnceCell;
use std::rc::{Rc, Weak};

type Slot<'code, S, T> = OnceCell<BoxedParser<'code, S, T>>;

/// A parser whose definition is supplied after construction
pub struct Recursive<'code, S: Symbol, T> {
    slot: Rc<Slot<'code, S, T>>,
}

/// A weak reference to a [`Recursive`] parser, for use inside its own definition
pub struct RecursiveHandle<'code, S: Symbol, T> {
    slot: Weak<Slot<'code, S, T>>,
}

impl<'code, S: Symbol, T> Recursive<'code, S, T> {
    /// Declare a parser to be defined later
    pub fn declare() -> Self {
        Recursive {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// A handle that parses with this parser's definition
    pub fn handle(&self) -> RecursiveHandle<'code, S, T> {
        RecursiveHandle {
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Supply the definition; a parser can only be defined once
    pub fn define<P>(&self, parser: P) -> Result<(), InvalidArgument>
    where
        P: Parser<'code, Symbol = S, Output = T> + 'code,
    {
        self.slot
            .set(BoxedParser::new(parser))
            .map_err(|_| InvalidArgument::AlreadyDefined)
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<S: Symbol, T> Clone for Recursive<'_, S, T> {
    fn clone(&self) -> Self {
        Recursive {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<S: Symbol, T> Clone for RecursiveHandle<'_, S, T> {
    fn clone(&self) -> Self {
        RecursiveHandle {
            slot: Weak::clone(&self.slot),
        }
    }
}

/// Parse with the definition in `slot`, escalating when there is none
fn parse_slot<'code, S: Symbol, T>(
    slot: &Slot<'code, S, T>,
    stream: Stream<'code, S>,
) -> Reply<'code, S, T> {
    match slot.get() {
        Some(parser) => parser.parse(stream),
        None => {
            tracing::warn!(
                position = %stream.position(),
                "recursive parser used before definition"
            );
            Reply::Error {
                stream,
                message: ErrorMessage::escalation("recursive parser used before definition"),
            }
        }
    }
}

impl<'code, S: Symbol, T> Parser<'code> for Recursive<'code, S, T> {
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        parse_slot(&self.slot, stream)
    }
}

impl<'code, S: Symbol, T> Parser<'code> for RecursiveHandle<'code, S, T> {
    type Symbol = S;
    type Output = T;

    fn parse(&self, stream: Stream<'code, S>) -> Reply<'code, S, T> {
        match self.slot.upgrade() {
            Some(slot) => parse_slot(&slot, stream),
            None => {
                tracing::warn!(position = %stream.position(), "recursive parser no longer exists");
                Reply::Error {
                    stream,
                    message: ErrorMessage::escalation("recursive parser no longer exists"),
                }
            }
        }
    }
}

/// Build a self-referential parser
///
/// `build` receives a handle to the parser being defined and returns its
/// definition.
///
/// ```
/// use parsistream::{Parser, Stream, OrExt, ThenExt, MapExt, recursive, symbol};
///
/// // nested := '[' nested ']' | 'x'
/// let nested = recursive(|nested| {
///     symbol('[')
///         .ignore_then(nested)
///         .then_ignore(symbol(']'))
///         .map(|depth: usize| depth + 1)
///         .or(symbol('x').map(|_| 0))
/// });
/// assert_eq!(nested.parse(Stream::from_text("[[x]]")).ok(), Some(2));
/// ```
pub fn recursive<'code, S, T, P, F>(build: F) -> Recursive<'code, S, T>
where
    S: Symbol,
    F: FnOnce(RecursiveHandle<'code, S, T>) -> P,
    P: Parser<'code, Symbol = S, Output = T> + 'code,
{
    let parser = Recursive::declare();
    let definition = build(parser.handle());
    // Freshly declared, so the slot is empty
    let _ = parser.slot.set(BoxedParser::new(definition));
    parser
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::maybe::MaybeExt;
    use crate::or::OrExt;
    use crate::then::ThenExt;
    use crate::token::{satisfy, symbol};

    #[test]
    fn test_declare_then_define() {
        let list: Recursive<'_, char, usize> = Recursive::declare();
        assert!(!list.is_defined());

        // list := 'a' list?
        let definition = symbol('a')
            .ignore_then(list.handle().maybe())
            .map(|rest| 1 + rest.unwrap_or(0));
        list.define(definition).unwrap();
        assert!(list.is_defined());

        assert_eq!(list.parse(Stream::from_text("aaab")).ok(), Some(3));
    }

    #[test]
    fn test_define_twice_rejected() {
        let parser: Recursive<'_, char, char> = Recursive::declare();
        parser.define(symbol('a')).unwrap();
        assert_eq!(parser.define(symbol('b')), Err(InvalidArgument::AlreadyDefined));
    }

    #[test]
    fn test_undefined_use_escalates() {
        let parser: Recursive<'_, char, char> = Recursive::declare();
        let reply = parser.parse(Stream::from_text("a"));
        assert!(reply.is_escalation());
    }

    #[test]
    fn test_handle_outliving_parser_escalates() {
        let handle = {
            let parser = recursive(|_| symbol('a'));
            parser.handle()
        };
        let reply = handle.parse(Stream::from_text("a"));
        assert!(reply.is_escalation());
        assert_eq!(reply.message().unwrap().text(), "recursive parser no longer exists");
    }

    #[test]
    fn test_no_reference_cycle() {
        let parser = recursive(|digits| {
            satisfy(|c: char| c.is_ascii_digit())
                .then(digits.maybe())
                .map(|(_, rest): (char, Option<usize>)| 1 + rest.unwrap_or(0))
        });
        assert_eq!(parser.parse(Stream::from_text("1234")).ok(), Some(4));

        let weak = Rc::downgrade(&parser.slot);
        drop(parser);
        assert!(weak.upgrade().is_none());
    }
}
