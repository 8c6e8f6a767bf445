use crate::{
    ast::{Node, NodeKind},
    error::Error,
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::core::{Attempt, Parsed, Parser, register},
        position::Span,
    },
};

impl Parser {
    /// Parses a comma-separated list of expressions up to a closing token.
    ///
    /// This utility is shared by list literals and call arguments. The
    /// opening token must already be consumed. An immediately encountered
    /// closing token produces an empty list.
    ///
    /// Grammar (simplified): `items := (expression (',' expression)*)?
    /// closing`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list, `]` or `)`.
    /// - `closing_text`: How `closing` is spelled in error messages.
    ///
    /// # Returns
    /// The parsed items and the span of the closing token.
    pub(in crate::interpreter::parser) fn parse_comma_separated(&mut self,
                                                                closing: &TokenKind,
                                                                closing_text: &str)
                                                                -> Parsed<(Vec<Node>, Span)> {
        let mut res = Attempt::default();
        let mut items = Vec::new();

        if !self.at(closing) {
            match res.register(self.parse_expression()) {
                Ok(item) => items.push(item),
                Err(inner) => {
                    let outer = self.syntax_error(format!("expected '{closing_text}', 'obj', \
                                                           'if', 'walk', 'while', 'func', \
                                                           number, string, identifier, '+', \
                                                           '-', '(', '[' or 'oppositeof'"));
                    return res.failure_over(inner, outer);
                },
            }

            while self.at(&TokenKind::Comma) {
                self.advance(&mut res);
                items.push(register!(res, self.parse_expression()));
            }

            if !self.at(closing) {
                return res.failure(self.syntax_error(format!("expected ',' or '{closing_text}'")));
            }
        }

        let end = self.current().span.clone();
        self.advance(&mut res);

        res.success((items, end))
    }

    /// Parses a list literal of the form `[expr1, expr2, ..., exprN]`.
    ///
    /// An empty list `[]` is accepted.
    ///
    /// Grammar: `list := '[' (expression (',' expression)*)? ']'`
    pub(in crate::interpreter::parser) fn parse_list(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let start = self.current().span.clone();
        self.advance(&mut res);

        let (elements, end) = register!(res, self.parse_comma_separated(&TokenKind::RBracket, "]"));

        res.success(Node::new(NodeKind::List(elements), start.to(&end)))
    }

    /// Consumes a plain identifier and returns its name and span.
    ///
    /// # Errors
    /// Returns a syntax error if the current token is not an identifier.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self,
                                                            res: &mut Attempt)
                                                            -> Result<(String, Span), Error> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Identifier(name) => {
                self.advance(res);
                Ok((name, token.span))
            },
            _ => Err(self.syntax_error("expected identifier")),
        }
    }

    /// Consumes a token of the given kind and returns its span.
    ///
    /// # Errors
    /// Returns a syntax error naming `text` if the current token differs.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 res: &mut Attempt,
                                                 kind: &TokenKind,
                                                 text: &str)
                                                 -> Result<Span, Error> {
        if !self.at(kind) {
            return Err(self.syntax_error(format!("expected '{text}'")));
        }
        let span = self.current().span.clone();
        self.advance(res);
        Ok(span)
    }

    /// Consumes the given keyword and returns its span.
    ///
    /// # Errors
    /// Returns a syntax error naming the keyword if it is missing.
    pub(in crate::interpreter::parser) fn expect_keyword(&mut self,
                                                         res: &mut Attempt,
                                                         keyword: Keyword)
                                                         -> Result<Span, Error> {
        self.expect(res, &TokenKind::Keyword(keyword), keyword.as_str())
    }
}
