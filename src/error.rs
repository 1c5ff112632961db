use crate::position::Position;
use std::borrow::Cow;
use thiserror::Error;

/// Precondition violations reported at the offending call.
///
/// These are never produced while parsing and no combinator can recover
/// from them; they indicate a programming error in how the toolkit is
/// driven rather than a mismatch in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("lookahead depth must be at least 1")]
    ZeroLookahead,
    #[error("lookahead depth {0} exceeds the maximum window size")]
    LookaheadTooDeep(usize),
    #[error("line numbers start at 1, got {0}")]
    Line(usize),
    #[error("column numbers start at 1, got {0}")]
    Column(usize),
    #[error("recursive parser is already defined")]
    AlreadyDefined,
}

/// The user-visible outcome of a top-level parse that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Every alternative failed without producing a diagnostic
    #[error("{position}: no alternative matched")]
    NoMatch { position: Position },
    /// A parser reported an error (or escalated) with a message
    #[error("{position}: {message}")]
    Syntax {
        message: Cow<'static, str>,
        position: Position,
    },
}

impl ParseError {
    /// Returns the position where this error occurred
    pub fn position(&self) -> Position {
        match self {
            ParseError::NoMatch { position } => *position,
            ParseError::Syntax { position, .. } => *position,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParseError::NoMatch { .. } => "no alternative matched",
            ParseError::Syntax { message, .. } => message,
        }
    }
}
