use glang::{
    error::ErrorKind,
    interpreter::lexer::{Keyword, TokenKind, tokenize},
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    let (tokens, error) = tokenize("<test>", src);
    assert!(error.is_none(), "unexpected lexical error: {error:?}");
    tokens.into_iter().map(|token| token.kind).collect()
}

#[test]
fn assignment_tokens() {
    assert_eq!(kinds("obj x = 1.5"),
               vec![TokenKind::Keyword(Keyword::Obj),
                    TokenKind::Identifier("x".into()),
                    TokenKind::Equals,
                    TokenKind::Float(1.5),
                    TokenKind::Eof]);
}

#[test]
fn keywords_need_the_whole_word() {
    assert_eq!(kinds("walk walker"),
               vec![TokenKind::Keyword(Keyword::Walk),
                    TokenKind::Identifier("walker".into()),
                    TokenKind::Eof]);
}

#[test]
fn operators_take_the_longest_match() {
    assert_eq!(kinds("<= < == = != -> -"),
               vec![TokenKind::LessEqual,
                    TokenKind::Less,
                    TokenKind::EqualEqual,
                    TokenKind::Equals,
                    TokenKind::BangEqual,
                    TokenKind::Arrow,
                    TokenKind::Minus,
                    TokenKind::Eof]);
}

#[test]
fn separators_and_comments() {
    assert_eq!(kinds("1; 2 # ignored\n3"),
               vec![TokenKind::Int(1.0),
                    TokenKind::Newline,
                    TokenKind::Int(2.0),
                    TokenKind::Newline,
                    TokenKind::Int(3.0),
                    TokenKind::Eof]);
}

#[test]
fn string_escapes() {
    assert_eq!(kinds(r#""a\nb\t\"c\"""#),
               vec![TokenKind::Str("a\nb\t\"c\"".into()), TokenKind::Eof]);
}

#[test]
fn positions_track_lines_and_columns() {
    let (tokens, _) = tokenize("<test>", "obj\n  x");
    let x = &tokens[2];

    assert_eq!(x.kind, TokenKind::Identifier("x".into()));
    assert_eq!((x.span.start.line, x.span.start.column), (1, 2));
    assert_eq!((x.span.end.line, x.span.end.column), (1, 3));
}

#[test]
fn second_dot_is_illegal() {
    let (tokens, error) = tokenize("<test>", "1.2.3");
    let error = error.expect("the second dot should be rejected");

    assert_eq!(tokens[0].kind, TokenKind::Float(1.2));
    assert_eq!(error.kind, ErrorKind::IllegalCharacter);
    assert_eq!(error.message, "'.'");
    assert_eq!(error.span.start.column, 3);
}

#[test]
fn lone_bang_expects_equals() {
    let (_, error) = tokenize("<test>", "!x");
    let error = error.expect("a lone '!' should be rejected");

    assert_eq!(error.kind, ErrorKind::ExpectedCharacter);
    assert_eq!(error.message, "expected '=' after '!'");
}

#[test]
fn unterminated_string() {
    let (_, error) = tokenize("<test>", "bark(\"oops)");
    assert_eq!(error.map(|e| e.kind), Some(ErrorKind::UnterminatedString));
}

#[test]
fn windows_line_endings_are_normalized() {
    assert_eq!(kinds("1\r\n2"),
               vec![TokenKind::Int(1.0), TokenKind::Newline, TokenKind::Int(2.0), TokenKind::Eof]);
}

#[test]
fn long_integer_literals_become_numbers() {
    assert_eq!(kinds("99999999999999999999 9007199254740993"),
               vec![TokenKind::Int(1e20), TokenKind::Int(9_007_199_254_740_992.0), TokenKind::Eof]);
}
