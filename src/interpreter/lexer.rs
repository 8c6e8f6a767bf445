use std::{fmt, rc::Rc};

use logos::Logos;

use crate::{
    error::{Error, ErrorKind},
    interpreter::position::{Position, Source, Span},
};

/// The kind of a lexical token, along with its literal value.
///
/// The scanner itself is generated by `logos`. Positions are attached
/// afterwards by [`tokenize`], which wraps each kind in a [`Token`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    ///
    /// Language numbers are `f64`, so digits of any length are accepted and
    /// literals past `2^53` round to the nearest representable value.
    #[regex(r"[0-9]+", parse_float)]
    Int(f64),
    /// Numeric literal tokens with a fractional part, such as `3.14` or `1.`.
    ///
    /// A literal holds at most one `.`; in `1.2.3` the second dot is left
    /// over and rejected on its own.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// String literal tokens, such as `"bark\n"`.
    #[token("\"", lex_string)]
    Str(String),
    /// Reserved words.
    #[token("obj", |_| Keyword::Obj)]
    #[token("and", |_| Keyword::And)]
    #[token("or", |_| Keyword::Or)]
    #[token("oppositeof", |_| Keyword::OppositeOf)]
    #[token("if", |_| Keyword::If)]
    #[token("then", |_| Keyword::Then)]
    #[token("alsoif", |_| Keyword::AlsoIf)]
    #[token("otherwise", |_| Keyword::Otherwise)]
    #[token("walk", |_| Keyword::Walk)]
    #[token("through", |_| Keyword::Through)]
    #[token("step", |_| Keyword::Step)]
    #[token("while", |_| Keyword::While)]
    #[token("func", |_| Keyword::Func)]
    #[token("give", |_| Keyword::Give)]
    #[token("next", |_| Keyword::Next)]
    #[token("leave", |_| Keyword::Leave)]
    #[token("endbody", |_| Keyword::EndBody)]
    Keyword(Keyword),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// A `!` that is not part of `!=`. Never reaches the parser.
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `->`
    #[token("->")]
    Arrow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// Statement separators, a line break or `;`.
    #[token("\n")]
    #[token(";")]
    Newline,
    /// End of input. Appended by [`tokenize`], never scanned.
    Eof,
}

/// The reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Obj,
    And,
    Or,
    OppositeOf,
    If,
    Then,
    AlsoIf,
    Otherwise,
    Walk,
    Through,
    Step,
    While,
    Func,
    Give,
    Next,
    Leave,
    EndBody,
}

impl Keyword {
    /// The spelling of the keyword in source code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::And => "and",
            Self::Or => "or",
            Self::OppositeOf => "oppositeof",
            Self::If => "if",
            Self::Then => "then",
            Self::AlsoIf => "alsoif",
            Self::Otherwise => "otherwise",
            Self::Walk => "walk",
            Self::Through => "through",
            Self::Step => "step",
            Self::While => "while",
            Self::Func => "func",
            Self::Give => "give",
            Self::Next => "next",
            Self::Leave => "leave",
            Self::EndBody => "endbody",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the scanner rejected a piece of input.
///
/// `IllegalCharacter` is the default, reported by `logos` for input that
/// starts no token at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    #[default]
    IllegalCharacter,
    UnterminatedString,
}

/// A token together with the source range it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Where it was scanned.
    pub span: Span,
}

impl Token {
    /// Returns `true` if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

/// Converts source text into tokens.
///
/// Carriage-return line endings are normalized first. On success the last
/// token is always [`TokenKind::Eof`]. On failure the tokens scanned before
/// the offending input are returned along with the error, without an `Eof`.
///
/// # Parameters
/// - `source_name`: Name used for the source in diagnostics.
/// - `text`: The program text.
///
/// # Returns
/// The scanned tokens and the first lexical error, if any.
///
/// # Example
/// ```
/// use glang::interpreter::lexer::{TokenKind, tokenize};
///
/// let (tokens, error) = tokenize("<test>", "1.2.3");
///
/// assert_eq!(tokens[0].kind, TokenKind::Float(1.2));
/// assert_eq!(error.unwrap().span.start.column, 3);
/// ```
pub fn tokenize(source_name: &str, text: &str) -> (Vec<Token>, Option<Error>) {
    let source = Source::new(source_name, text.replace("\r\n", "\n"));
    let mut cursor = Position::start(Rc::clone(&source));
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(&source.text);

    while let Some(scanned) = lexer.next() {
        let range = lexer.span();
        cursor.advance_to(range.start);
        let start = cursor.clone();

        let error = match scanned {
            Ok(TokenKind::Bang) => {
                let mut end = start.clone();
                end.advance('!');
                if let Some(ch) = source.text.get(range.end..).and_then(|rest| rest.chars().next()) {
                    end.advance(ch);
                }
                Error::new(ErrorKind::ExpectedCharacter,
                           "expected '=' after '!'",
                           Span::new(start, end))
            },
            Ok(kind) => {
                cursor.advance_to(range.end);
                tokens.push(Token { kind,
                                    span: Span::new(start, cursor.clone()) });
                continue;
            },
            Err(LexFault::IllegalCharacter) => {
                let ch = lexer.slice().chars().next().unwrap_or(' ');
                let mut end = start.clone();
                end.advance(ch);
                Error::new(ErrorKind::IllegalCharacter, format!("'{ch}'"), Span::new(start, end))
            },
            Err(LexFault::UnterminatedString) => {
                cursor.advance_to(range.end);
                Error::new(ErrorKind::UnterminatedString,
                           "string literal is missing its closing '\"'",
                           Span::new(start, cursor.clone()))
            },
        };

        tracing::trace!(tokens = tokens.len(), "lexing stopped at an error");
        return (tokens, Some(error));
    }

    cursor.advance_to(source.text.len());
    tokens.push(Token { kind: TokenKind::Eof,
                        span: Span::at(cursor) });
    tracing::trace!(tokens = tokens.len(), source = source_name, "lexed");

    (tokens, None)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Scans the body of a string literal after its opening quote.
///
/// `\n` and `\t` are the only translated escapes; any other escaped character
/// stands for itself. Without a closing quote the rest of the input is
/// consumed and the literal is rejected.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexFault> {
    let remainder = lex.remainder();
    let mut value = String::new();
    let mut escaping = false;

    for (index, ch) in remainder.char_indices() {
        if escaping {
            value.push(match ch {
                           'n' => '\n',
                           't' => '\t',
                           other => other,
                       });
            escaping = false;
        } else if ch == '\\' {
            escaping = true;
        } else if ch == '"' {
            lex.bump(index + 1);
            return Ok(value);
        } else {
            value.push(ch);
        }
    }

    lex.bump(remainder.len());
    Err(LexFault::UnterminatedString)
}
