use std::fmt;

/// An atomic unit a stream yields and a parser consumes.
///
/// The line-terminator constants drive position tracking: a `LINE_FEED`, or a
/// `CARRIAGE_RETURN` not followed by a `LINE_FEED`, starts a new line.
pub trait Symbol: Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    const LINE_FEED: Self;
    const CARRIAGE_RETURN: Self;

    fn is_line_feed(self) -> bool {
        self == Self::LINE_FEED
    }

    fn is_carriage_return(self) -> bool {
        self == Self::CARRIAGE_RETURN
    }
}

impl Symbol for char {
    const LINE_FEED: Self = '\n';
    const CARRIAGE_RETURN: Self = '\r';
}

impl Symbol for u8 {
    const LINE_FEED: Self = b'\n';
    const CARRIAGE_RETURN: Self = b'\r';
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_terminators() {
        assert!('\n'.is_line_feed());
        assert!('\r'.is_carriage_return());
        assert!(!'a'.is_line_feed());
        assert!(!'\n'.is_carriage_return());
    }

    #[test]
    fn test_byte_terminators() {
        assert!(b'\n'.is_line_feed());
        assert!(b'\r'.is_carriage_return());
        assert!(!b' '.is_line_feed());
    }
}
