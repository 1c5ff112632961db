//! Three-way outcome of a parser attempt.
//!
//! | Variant   | Meaning                                    | Combinators            |
//! |-----------|--------------------------------------------|------------------------|
//! | `Success` | matched, carries value and residual stream | continue               |
//! | `Failure` | did not match, no message, backtrackable   | try next alternative   |
//! | `Error`   | diagnostic with message, never retried     | propagate unchanged    |
//!
//! An `Error` whose message is *escalated* was raised by
//! [`fail_fast`](crate::commit::fail_fast). Escalations behave like any other
//! error inside combinators, but [`attempt`](crate::attempt::attempt) cannot
//! turn them back into failures; only [`run`](crate::run::run) or
//! [`boundary`](crate::commit::boundary) settle them.

use crate::error::ParseError;
use crate::position::Position;
use crate::stream::Stream;
use crate::symbol::Symbol;
use std::borrow::Cow;
use std::fmt;

/// The diagnostic carried by [`Reply::Error`]; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    text: Cow<'static, str>,
    escalated: bool,
}

impl ErrorMessage {
    const UNSPECIFIED: &'static str = "unspecified parse error";

    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        let text = text.into();
        let text = if text.is_empty() {
            Cow::Borrowed(Self::UNSPECIFIED)
        } else {
            text
        };
        ErrorMessage {
            text,
            escalated: false,
        }
    }

    pub(crate) fn escalation(text: impl Into<Cow<'static, str>>) -> Self {
        ErrorMessage {
            escalated: true,
            ..Self::new(text)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this message was raised by a fail-fast parser and not yet settled
    pub fn is_escalated(&self) -> bool {
        self.escalated
    }

    /// Turn an escalation into an ordinary error message
    pub(crate) fn settle(self) -> Self {
        ErrorMessage {
            escalated: false,
            ..self
        }
    }

    pub(crate) fn into_text(self) -> Cow<'static, str> {
        self.text
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The outcome of running a parser on a stream
#[must_use = "a reply carries the residual stream and must be inspected"]
pub enum Reply<'code, S: Symbol, T> {
    /// Matched: the produced value and the stream after the match
    Success { value: T, stream: Stream<'code, S> },
    /// Did not match; backtrackable
    Failure { stream: Stream<'code, S> },
    /// A diagnostic at the stream's position; combinators never retry past it
    Error {
        stream: Stream<'code, S>,
        message: ErrorMessage,
    },
}

impl<'code, S: Symbol, T> Reply<'code, S, T> {
    // === Constructors ===

    pub fn success(value: T, stream: Stream<'code, S>) -> Self {
        Reply::Success { value, stream }
    }

    pub fn failure(stream: Stream<'code, S>) -> Self {
        Reply::Failure { stream }
    }

    /// Create an error reply; an empty message is replaced by a generic one
    pub fn error(stream: Stream<'code, S>, message: impl Into<Cow<'static, str>>) -> Self {
        Reply::Error {
            stream,
            message: ErrorMessage::new(message),
        }
    }

    // === Predicates ===

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failure { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }

    /// Returns `true` for an error raised by a fail-fast parser and not yet settled
    pub fn is_escalation(&self) -> bool {
        matches!(self, Reply::Error { message, .. } if message.is_escalated())
    }

    // === Accessors ===

    /// The residual stream, whatever the outcome
    pub fn stream(&self) -> &Stream<'code, S> {
        match self {
            Reply::Success { stream, .. }
            | Reply::Failure { stream }
            | Reply::Error { stream, .. } => stream,
        }
    }

    pub fn into_stream(self) -> Stream<'code, S> {
        match self {
            Reply::Success { stream, .. }
            | Reply::Failure { stream }
            | Reply::Error { stream, .. } => stream,
        }
    }

    /// Position of the residual stream
    pub fn position(&self) -> Position {
        self.stream().position()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Reply::Success { value, .. } => Some(value),
            Reply::Failure { .. } | Reply::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&ErrorMessage> {
        match self {
            Reply::Error { message, .. } => Some(message),
            Reply::Success { .. } | Reply::Failure { .. } => None,
        }
    }

    // === Transformations ===

    /// Map the success value, preserving the outcome and stream
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<'code, S, U> {
        match self {
            Reply::Success { value, stream } => Reply::Success {
                value: f(value),
                stream,
            },
            Reply::Failure { stream } => Reply::Failure { stream },
            Reply::Error { stream, message } => Reply::Error { stream, message },
        }
    }

    /// Continue from a success with its value and residual stream
    ///
    /// Failure and Error short-circuit with their stream and message unchanged.
    pub fn and_then<U>(
        self,
        f: impl FnOnce(T, Stream<'code, S>) -> Reply<'code, S, U>,
    ) -> Reply<'code, S, U> {
        match self {
            Reply::Success { value, stream } => f(value, stream),
            Reply::Failure { stream } => Reply::Failure { stream },
            Reply::Error { stream, message } => Reply::Error { stream, message },
        }
    }

    /// Split a success from the other outcomes, retyping the latter
    ///
    /// Lets combinators return early on anything but success:
    ///
    /// ```text
    /// let (value, stream) = match reply.into_success() {
    ///     Ok(ok) => ok,
    ///     Err(other) => return other,
    /// };
    /// ```
    pub fn into_success<U>(self) -> Result<(T, Stream<'code, S>), Reply<'code, S, U>> {
        match self {
            Reply::Success { value, stream } => Ok((value, stream)),
            Reply::Failure { stream } => Err(Reply::Failure { stream }),
            Reply::Error { stream, message } => Err(Reply::Error { stream, message }),
        }
    }

    /// Exhaustive case analysis over the three outcomes
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T, Stream<'code, S>) -> R,
        on_failure: impl FnOnce(Stream<'code, S>) -> R,
        on_error: impl FnOnce(Stream<'code, S>, ErrorMessage) -> R,
    ) -> R {
        match self {
            Reply::Success { value, stream } => on_success(value, stream),
            Reply::Failure { stream } => on_failure(stream),
            Reply::Error { stream, message } => on_error(stream, message),
        }
    }

    // === Conversions ===

    /// Convert to Option, discarding the stream and any diagnostic
    pub fn ok(self) -> Option<T> {
        match self {
            Reply::Success { value, .. } => Some(value),
            Reply::Failure { .. } | Reply::Error { .. } => None,
        }
    }

    /// Convert to `Result`, positioning failures and errors at the residual stream
    pub fn into_result(self) -> Result<(T, Stream<'code, S>), ParseError> {
        match self {
            Reply::Success { value, stream } => Ok((value, stream)),
            Reply::Failure { stream } => Err(ParseError::NoMatch {
                position: stream.position(),
            }),
            Reply::Error { stream, message } => Err(ParseError::Syntax {
                message: message.into_text(),
                position: stream.position(),
            }),
        }
    }
}

impl<S: Symbol, T: fmt::Debug> fmt::Debug for Reply<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Success { value, stream } => f
                .debug_struct("Success")
                .field("value", value)
                .field("stream", stream)
                .finish(),
            Reply::Failure { stream } => f.debug_struct("Failure").field("stream", stream).finish(),
            Reply::Error { stream, message } => f
                .debug_struct("Error")
                .field("stream", stream)
                .field("message", message)
                .finish(),
        }
    }
}
