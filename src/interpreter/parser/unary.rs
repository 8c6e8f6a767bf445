use crate::{
    ast::{Node, NodeKind, UnaryOperator},
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::core::{Attempt, Parsed, Parser, register, require},
    },
};

impl Parser {
    /// Parses a signed factor.
    ///
    /// Grammar: `factor := ('+' | '-') factor | power`
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let token = self.current().clone();

        let op = match token.kind {
            TokenKind::Plus => UnaryOperator::Plus,
            TokenKind::Minus => UnaryOperator::Minus,
            _ => return self.parse_power(),
        };

        self.advance(&mut res);
        let operand = register!(res, self.parse_factor());

        let span = token.span.to(&operand.span);
        res.success(Node::new(NodeKind::UnaryOp { op,
                                                  operand: Box::new(operand) },
                              span))
    }

    /// Parses an atom, optionally followed by a single call.
    ///
    /// Grammar: `call := atom ('(' (expression (',' expression)*)? ')')?`
    pub(in crate::interpreter::parser) fn parse_call(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let callee = register!(res, self.parse_atom());

        if !self.at(&TokenKind::LParen) {
            return res.success(callee);
        }
        self.advance(&mut res);

        let (args, closing) = register!(res, self.parse_comma_separated(&TokenKind::RParen, ")"));

        let span = callee.span.to(&closing);
        res.success(Node::new(NodeKind::Call { callee: Box::new(callee),
                                               args },
                              span))
    }

    /// Parses a primary expression.
    ///
    /// Grammar: `atom := INT | FLOAT | STRING | IDENT | '(' expression ')' |
    /// list | if | walk | while | func`
    ///
    /// # Errors
    /// Fails without consuming anything when the current token cannot start
    /// an expression.
    pub(in crate::interpreter::parser) fn parse_atom(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let token = self.current().clone();

        let kind = match token.kind {
            TokenKind::Int(value) | TokenKind::Float(value) => NodeKind::Number(value),
            TokenKind::Str(value) => NodeKind::String(value),
            TokenKind::Identifier(name) => NodeKind::VariableAccess(name),
            TokenKind::LParen => {
                self.advance(&mut res);
                let inner = register!(res, self.parse_expression());
                require!(res, self.expect(&mut res, &TokenKind::RParen, ")"));
                return res.success(inner);
            },
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::Keyword(Keyword::If) => return self.parse_if(),
            TokenKind::Keyword(Keyword::Walk) => return self.parse_for(),
            TokenKind::Keyword(Keyword::While) => return self.parse_while(),
            TokenKind::Keyword(Keyword::Func) => return self.parse_function_def(),
            _ => {
                return res.failure(self.syntax_error("expected number, string, identifier, \
                                                      '+', '-', '(', '[', 'if', 'walk', \
                                                      'while' or 'func'"));
            },
        };

        self.advance(&mut res);
        res.success(Node::new(kind, token.span))
    }
}
