use crate::{
    ast::{BinaryOperator, Node, NodeKind, UnaryOperator},
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::core::{Attempt, Parsed, Parser, register, require},
    },
};

/// A grammar rule, as passed to [`Parser::parse_binary_chain`].
type Rule = fn(&mut Parser) -> Parsed<Node>;

/// Operators accepted by a precedence level, keyed by the token that spells
/// them. Word operators are keyword tokens.
type OperatorSet = &'static [(TokenKind, BinaryOperator)];

const LOGICAL: OperatorSet = &[(TokenKind::Keyword(Keyword::And), BinaryOperator::And),
                               (TokenKind::Keyword(Keyword::Or), BinaryOperator::Or)];

const COMPARISON: OperatorSet = &[(TokenKind::EqualEqual, BinaryOperator::Equal),
                                  (TokenKind::BangEqual, BinaryOperator::NotEqual),
                                  (TokenKind::Less, BinaryOperator::Less),
                                  (TokenKind::Greater, BinaryOperator::Greater),
                                  (TokenKind::LessEqual, BinaryOperator::LessEqual),
                                  (TokenKind::GreaterEqual, BinaryOperator::GreaterEqual)];

const ARITHMETIC: OperatorSet = &[(TokenKind::Plus, BinaryOperator::Add),
                                  (TokenKind::Minus, BinaryOperator::Sub)];

const TERM: OperatorSet = &[(TokenKind::Star, BinaryOperator::Mul),
                            (TokenKind::Slash, BinaryOperator::Div)];

const POWER: OperatorSet = &[(TokenKind::Caret, BinaryOperator::Pow)];

impl Parser {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It handles assignment
    /// and otherwise starts at the lowest-precedence level, `and`/`or`.
    ///
    /// Grammar: `expression := 'obj' IDENT '=' expression | comparison (('and'
    /// | 'or') comparison)*`
    ///
    /// # Returns
    /// The parsed expression node.
    pub fn parse_expression(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();

        if self.at_keyword(Keyword::Obj) {
            let start = self.current().span.clone();
            self.advance(&mut res);

            let (name, _) = require!(res, self.expect_identifier(&mut res));
            require!(res, self.expect(&mut res, &TokenKind::Equals, "="));
            let value = register!(res, self.parse_expression());

            let span = start.to(&value.span);
            return res.success(Node::new(NodeKind::VariableAssign { name,
                                                                    value: Box::new(value) },
                                         span));
        }

        match res.register(self.parse_binary_chain(Self::parse_comparison,
                                                   Self::parse_comparison,
                                                   LOGICAL))
        {
            Ok(node) => res.success(node),
            Err(inner) => {
                let outer = self.syntax_error("expected 'obj', 'if', 'walk', 'while', 'func', \
                                               number, string, identifier, '+', '-', '(', '[' \
                                               or 'oppositeof'");
                res.failure_over(inner, outer)
            },
        }
    }

    /// Parses a comparison or a negated comparison.
    ///
    /// Grammar: `comparison := 'oppositeof' comparison | arithmetic (('==' |
    /// '!=' | '<' | '>' | '<=' | '>=') arithmetic)*`
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();

        if self.at_keyword(Keyword::OppositeOf) {
            let start = self.current().span.clone();
            self.advance(&mut res);

            let operand = register!(res, self.parse_comparison());
            let span = start.to(&operand.span);
            return res.success(Node::new(NodeKind::UnaryOp { op:      UnaryOperator::OppositeOf,
                                                             operand: Box::new(operand), },
                                         span));
        }

        match res.register(self.parse_binary_chain(Self::parse_arithmetic,
                                                   Self::parse_arithmetic,
                                                   COMPARISON))
        {
            Ok(node) => res.success(node),
            Err(inner) => {
                let outer = self.syntax_error("expected number, string, identifier, '+', '-', \
                                               '(', '[', 'if', 'walk', 'while', 'func' or \
                                               'oppositeof'");
                res.failure_over(inner, outer)
            },
        }
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `arithmetic := term (('+' | '-') term)*`
    pub(in crate::interpreter::parser) fn parse_arithmetic(&mut self) -> Parsed<Node> {
        self.parse_binary_chain(Self::parse_term, Self::parse_term, ARITHMETIC)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `term := factor (('*' | '/') factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> Parsed<Node> {
        self.parse_binary_chain(Self::parse_factor, Self::parse_factor, TERM)
    }

    /// Parses `^`.
    ///
    /// The right operand is a `factor`, so `2 ^ 3 ^ 2` groups as `2 ^ (3 ^ 2)`
    /// and `2 ^ -1` is accepted.
    ///
    /// Grammar: `power := call ('^' factor)*`
    pub(in crate::interpreter::parser) fn parse_power(&mut self) -> Parsed<Node> {
        self.parse_binary_chain(Self::parse_call, Self::parse_factor, POWER)
    }

    /// Parses a left-associative chain of binary operations.
    ///
    /// Every precedence level is an instance of this combinator. The first
    /// operand is parsed with `left`, every operand after an operator from
    /// `operators` with `right`.
    ///
    /// # Parameters
    /// - `left`: Rule for the first operand.
    /// - `right`: Rule for the operands following an operator.
    /// - `operators`: The operators accepted at this level.
    ///
    /// # Returns
    /// The operand itself when no operator follows it, otherwise a
    /// left-nested `NodeKind::BinaryOp` tree.
    fn parse_binary_chain(&mut self, left: Rule, right: Rule, operators: OperatorSet)
                          -> Parsed<Node> {
        let mut res = Attempt::default();
        let mut node = register!(res, left(self));

        while let Some(op) = operators.iter()
                                      .find(|(kind, _)| self.at(kind))
                                      .map(|(_, op)| *op)
        {
            self.advance(&mut res);
            let operand = register!(res, right(self));

            let span = node.span.to(&operand.span);
            node = Node::new(NodeKind::BinaryOp { left: Box::new(node),
                                                  op,
                                                  right: Box::new(operand) },
                             span);
        }

        res.success(node)
    }
}
