use crate::{
    ast::{Node, NodeKind},
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::core::{Attempt, Parsed, Parser, register},
    },
};

impl Parser {
    /// Parses a sequence of statements separated by new lines or `;`.
    ///
    /// Grammar: `statements := NEWLINE* statement (NEWLINE+ statement)*`
    ///
    /// After each run of separators another statement is attempted. If the
    /// attempt fails without consuming anything, the cursor is rewound and
    /// the sequence ends quietly, leaving the next token (usually `endbody`,
    /// `alsoif`, `otherwise` or the end of input) to the caller.
    ///
    /// # Returns
    /// A `NodeKind::Statements` node spanning the first to the last statement.
    pub(in crate::interpreter::parser) fn parse_statements(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();

        while self.at(&TokenKind::Newline) {
            self.advance(&mut res);
        }

        let first = register!(res, self.parse_statement());
        let mut span = first.span.clone();
        let mut statements = vec![first];

        loop {
            let mut separators = 0;
            while self.at(&TokenKind::Newline) {
                self.advance(&mut res);
                separators += 1;
            }
            if separators == 0 {
                break;
            }

            match res.try_register(self.parse_statement()) {
                Ok(Some(statement)) => {
                    span = span.to(&statement.span);
                    statements.push(statement);
                },
                Ok(None) => {
                    self.reverse(res.to_reverse());
                    break;
                },
                Err(error) => return res.failure(error),
            }
        }

        res.success(Node::new(NodeKind::Statements(statements), span))
    }

    /// Parses a single statement.
    ///
    /// Grammar: `statement := 'give' expression? | 'next' | 'leave' |
    /// expression`
    ///
    /// The value after `give` is optional. It is parsed speculatively and a
    /// failure that consumed nothing turns the statement into a bare `give`.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let token = self.current().clone();

        if token.is_keyword(Keyword::Give) {
            self.advance(&mut res);

            let value = match res.try_register(self.parse_expression()) {
                Ok(value) => value,
                Err(error) => return res.failure(error),
            };
            if value.is_none() {
                self.reverse(res.to_reverse());
            }

            let span = value.as_ref()
                            .map_or_else(|| token.span.clone(), |value| token.span.to(&value.span));
            return res.success(Node::new(NodeKind::Return(value.map(Box::new)), span));
        }

        if token.is_keyword(Keyword::Next) {
            self.advance(&mut res);
            return res.success(Node::new(NodeKind::Continue, token.span));
        }

        if token.is_keyword(Keyword::Leave) {
            self.advance(&mut res);
            return res.success(Node::new(NodeKind::Break, token.span));
        }

        match res.register(self.parse_expression()) {
            Ok(expression) => res.success(expression),
            Err(inner) => {
                let outer = self.syntax_error("expected 'give', 'next', 'leave', 'obj', 'if', \
                                               'walk', 'while', 'func', number, string, \
                                               identifier, '+', '-', '(', '[' or 'oppositeof'");
                res.failure_over(inner, outer)
            },
        }
    }
}
