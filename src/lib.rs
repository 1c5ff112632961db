//! # ParsiStream - Backtracking Parser Combinators over Memoized Streams
//!
//! ParsiStream provides composable parsers for recursive-descent grammars,
//! lexers and DSL front-ends. Parsers run over an immutable [`Stream`] and
//! answer with a three-way [`Reply`]:
//!
//! - **Success** carries a value and the stream after the match
//! - **Failure** is a cheap, backtrackable non-match; `or`, `choice` and
//!   repetitions try something else
//! - **Error** carries a message and is never retried
//!
//! Streams are memoized: consuming a stream twice yields the same successor,
//! and the source is read once per symbol, so alternatives rewind for free by
//! reusing an earlier stream. [`fail_fast`] and [`commit`] cut backtracking
//! entirely until [`run`] or a [`boundary`].
//!
//! ```
//! use parsistream::{Parser, Stream, ManyExt, satisfy};
//!
//! let digits = satisfy(|c: char| c.is_ascii_digit()).many();
//! let (value, rest) = digits.parse(Stream::from_text("123")).into_result().unwrap();
//! assert_eq!(value, vec!['1', '2', '3']);
//! assert_eq!(rest.position().to_string(), "1:4");
//! ```

pub mod and;
pub mod at_least;
pub mod attempt;
pub mod between;
pub mod bind;
pub mod boxed;
pub mod buffer;
pub mod choice;
pub mod commit;
pub mod delayed;
pub mod error;
pub mod filter;
pub mod ignore;
pub mod inspect;
pub mod label;
pub mod lazy;
pub mod many;
pub mod map;
pub mod maybe;
pub mod not;
pub mod or;
pub mod parser;
pub mod position;
pub mod pure;
pub mod recursive;
pub mod repeat;
pub mod reply;
pub mod run;
pub mod separated_list;
pub mod sequence;
pub mod source;
pub mod stream;
pub mod symbol;
pub mod then;
pub mod token;

pub use and::{AndExt, and};
pub use at_least::{AtLeastExt, at_least, some};
pub use attempt::{AttemptExt, attempt};
pub use between::between;
pub use bind::{BindExt, bind};
pub use boxed::{BoxedExt, BoxedParser};
pub use buffer::LookaheadBuffer;
pub use choice::choice;
pub use commit::{CommitExt, boundary, commit, fail_fast};
pub use delayed::Delayed;
pub use error::{InvalidArgument, ParseError};
pub use filter::{FilterExt, filter};
pub use ignore::{IgnoreExt, ignore};
pub use inspect::{InspectExt, inspect};
pub use label::{LabelExt, label};
pub use lazy::lazy;
pub use many::{ManyExt, many};
pub use map::{MapExt, map};
pub use maybe::{MaybeExt, maybe};
pub use not::{NotExt, not};
pub use or::{OrExt, or};
pub use parser::{Parser, parser_fn};
pub use position::{Position, Span, SpannedExt, spanned};
pub use pure::{error, failure, success};
pub use recursive::{Recursive, RecursiveHandle, recursive};
pub use repeat::{RepeatExt, repeat};
pub use reply::{ErrorMessage, Reply};
pub use run::{RunExt, parse, run};
pub use separated_list::separated_list;
pub use sequence::sequence;
pub use source::{IterSource, ReadSource, Source};
pub use stream::Stream;
pub use symbol::Symbol;
pub use then::{ThenExt, then};
pub use token::{any, end, literal, satisfy, symbol, text};
