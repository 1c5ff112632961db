use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
///
/// # Note
/// - Requires at least one element
/// - A separator must be followed by an item; a trailing separator fails
///   where the missing item was expected
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Symbol = P::Symbol>,
{
    type Symbol = P::Symbol;
    type Output = Vec<P::Output>;

    fn parse(&self, stream: Stream<'code, P::Symbol>) -> Reply<'code, P::Symbol, Vec<P::Output>> {
        let (first, mut stream) = match self.parser.parse(stream).into_success() {
            Ok(first) => first,
            Err(other) => return other,
        };
        let mut results = vec![first];

        loop {
            let after_separator = match self.separator.parse(stream.clone()) {
                Reply::Success { stream, .. } => stream,
                Reply::Failure { .. } => return Reply::success(results, stream),
                Reply::Error { stream, message } => return Reply::Error { stream, message },
            };

            match self.parser.parse(after_separator.clone()) {
                Reply::Success { value, stream: next } => {
                    if next.position().index() == stream.position().index() {
                        tracing::debug!(
                            position = %stream.position(),
                            "rejecting zero-width list item"
                        );
                        return Reply::error(
                            stream,
                            "separated item succeeded without consuming input",
                        );
                    }
                    results.push(value);
                    stream = next;
                }
                Reply::Failure { .. } => return Reply::failure(after_separator),
                Reply::Error { stream, message } => return Reply::Error { stream, message },
            }
        }
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Symbol = P::Symbol>,
{
    SeparatedList::new(parser, separator)
}
