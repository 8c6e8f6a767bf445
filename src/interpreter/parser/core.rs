use crate::{
    ast::Node,
    error::{Error, ErrorKind},
    interpreter::{
        lexer::{Keyword, Token, TokenKind},
        position::{Position, Source, Span},
    },
};

/// The outcome of a grammar rule.
///
/// Besides the parsed value or error, every rule reports how many tokens it
/// consumed. Callers use the count to decide whose error to keep and how far
/// to rewind after a failed speculative parse.
#[derive(Debug)]
pub struct Parsed<T> {
    /// The parsed value, or why the rule failed.
    pub result:   Result<T, Error>,
    /// Number of tokens consumed, including those of a failed rule.
    pub advanced: usize,
}

/// Bookkeeping for a single grammar rule while it runs.
///
/// A rule creates one `Attempt`, feeds it the results of its sub-rules and
/// finishes with [`Attempt::success`] or one of the failure constructors.
#[derive(Debug, Default)]
pub struct Attempt {
    advanced:   usize,
    to_reverse: usize,
}

impl Attempt {
    /// Number of tokens the last abandoned speculative parse consumed.
    #[must_use]
    pub const fn to_reverse(&self) -> usize {
        self.to_reverse
    }

    /// Counts the tokens a sub-rule consumed and returns its result.
    pub fn register<T>(&mut self, parsed: Parsed<T>) -> Result<T, Error> {
        self.advanced += parsed.advanced;
        parsed.result
    }

    /// Registers a speculative sub-rule.
    ///
    /// A sub-rule that fails without consuming anything is abandoned:
    /// `Ok(None)` is returned and its token count is remembered in
    /// [`Attempt::to_reverse`] for the caller to rewind. A sub-rule that made
    /// progress before failing is the most-progressed failure, so its error is
    /// returned.
    pub fn try_register<T>(&mut self, parsed: Parsed<T>) -> Result<Option<T>, Error> {
        match parsed.result {
            Ok(value) => {
                self.advanced += parsed.advanced;
                Ok(Some(value))
            },
            Err(error) if parsed.advanced > 0 => {
                self.advanced += parsed.advanced;
                Err(error)
            },
            Err(_) => {
                self.to_reverse = parsed.advanced;
                Ok(None)
            },
        }
    }

    /// Finishes the rule with a value.
    pub fn success<T>(self, value: T) -> Parsed<T> {
        Parsed { result:   Ok(value),
                 advanced: self.advanced, }
    }

    /// Finishes the rule with an error.
    pub fn failure<T>(self, error: Error) -> Parsed<T> {
        Parsed { result:   Err(error),
                 advanced: self.advanced, }
    }

    /// Finishes the rule with either a sub-rule's error or its own.
    ///
    /// The rule's own, more general message only replaces the sub-rule's
    /// error when the rule consumed no tokens at all.
    pub fn failure_over<T>(self, inner: Error, outer: Error) -> Parsed<T> {
        let error = if self.advanced == 0 { outer } else { inner };
        self.failure(error)
    }
}

/// Returns the value of a sub-rule, or finishes the current rule with its
/// error.
macro_rules! register {
    ($res:ident, $parsed:expr) => {
        match $res.register($parsed) {
            Ok(value) => value,
            Err(error) => return $res.failure(error),
        }
    };
}

/// Unwraps a plain `Result`, or finishes the current rule with its error.
macro_rules! require {
    ($res:ident, $result:expr) => {
        match $result {
            Ok(value) => value,
            Err(error) => return $res.failure(error),
        }
    };
}

pub(in crate::interpreter::parser) use {register, require};

/// A recursive-descent parser over a token vector.
///
/// The cursor is a plain index so speculative parses can be rewound with
/// [`Parser::reverse`].
pub struct Parser {
    tokens: Vec<Token>,
    index:  usize,
}

impl Parser {
    /// Creates a parser positioned at the first token.
    ///
    /// An `Eof` token is appended if the input does not already end with one.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|token| token.kind != TokenKind::Eof) {
            let end = tokens.last().map_or_else(|| Position::start(Source::new("<empty>", "")),
                                                |token| token.span.end.clone());
            tokens.push(Token { kind: TokenKind::Eof,
                                span: Span::at(end) });
        }
        Self { tokens, index: 0 }
    }

    /// The token under the cursor. Past the end this is the `Eof` token.
    pub(in crate::interpreter::parser) fn current(&self) -> &Token {
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    /// The span of the last consumed token.
    pub(in crate::interpreter::parser) fn previous_span(&self) -> Span {
        let index = self.index.saturating_sub(1).min(self.tokens.len() - 1);
        self.tokens[index].span.clone()
    }

    /// Consumes the current token on behalf of `res`.
    pub(in crate::interpreter::parser) const fn advance(&mut self, res: &mut Attempt) {
        res.advanced += 1;
        self.index += 1;
    }

    /// Moves the cursor back by `count` tokens.
    pub(in crate::interpreter::parser) const fn reverse(&mut self, count: usize) {
        self.index = self.index.saturating_sub(count);
    }

    /// Returns `true` if the current token has the given kind.
    pub(in crate::interpreter::parser) fn at(&self, kind: &TokenKind) -> bool {
        self.current().kind == *kind
    }

    /// Returns `true` if the current token is the given keyword.
    pub(in crate::interpreter::parser) fn at_keyword(&self, keyword: Keyword) -> bool {
        self.current().is_keyword(keyword)
    }

    /// Builds a syntax error pointing at the current token.
    pub(in crate::interpreter::parser) fn syntax_error(&self, message: impl Into<String>) -> Error {
        Error::new(ErrorKind::InvalidSyntax, message, self.current().span.clone())
    }
}

/// Parses a whole program.
///
/// The program is a statement sequence that must be followed by the end of
/// input; trailing tokens are a syntax error.
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// A [`NodeKind::Statements`](crate::ast::NodeKind::Statements) node.
///
/// # Example
/// ```
/// use glang::{
///     ast::NodeKind,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let (tokens, _) = tokenize("<test>", "obj x = 1\nx + 2");
/// let program = parse(tokens).unwrap();
///
/// assert!(matches!(program.kind, NodeKind::Statements(ref s) if s.len() == 2));
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_statements().result?;

    if !parser.at(&TokenKind::Eof) {
        return Err(parser.syntax_error("token cannot appear after previous tokens"));
    }

    tracing::debug!(source = %program.span.source().name, "parsed program");
    Ok(program)
}
