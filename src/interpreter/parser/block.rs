use std::rc::Rc;

use crate::{
    ast::{Branch, FunctionDef, IfCase, Node, NodeKind},
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::core::{Attempt, Parsed, Parser, register, require},
    },
};

/// Cases collected while parsing an `if` chain, and its `otherwise` branch.
type IfChain = (Vec<IfCase>, Option<Box<Branch>>);

impl Parser {
    /// Parses an `if` expression with chained `alsoif` cases and an optional
    /// `otherwise` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> then <statement>
    ///     alsoif <condition> then <statement>
    ///     otherwise <statement>
    /// ```
    /// Any body may instead be a block: a new line, statements, and
    /// `endbody`. A block case may be followed directly by `alsoif` or
    /// `otherwise`, in which case the chain shares the final `endbody`.
    ///
    /// # Returns
    /// A `NodeKind::If` node.
    pub(in crate::interpreter::parser) fn parse_if(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let start = self.current().span.clone();

        let (cases, otherwise) = register!(res, self.parse_if_cases(Keyword::If));

        let span = start.to(&self.previous_span());
        res.success(Node::new(NodeKind::If { cases, otherwise }, span))
    }

    /// Parses one `if` or `alsoif` case and everything chained after it.
    fn parse_if_cases(&mut self, keyword: Keyword) -> Parsed<IfChain> {
        let mut res = Attempt::default();

        require!(res, self.expect_keyword(&mut res, keyword));
        let condition = register!(res, self.parse_expression());
        require!(res, self.expect_keyword(&mut res, Keyword::Then));

        if self.at(&TokenKind::Newline) {
            self.advance(&mut res);
            let body = register!(res, self.parse_statements());
            let mut cases = vec![IfCase { condition,
                                          body,
                                          yields_null: true }];

            if self.at_keyword(Keyword::EndBody) {
                self.advance(&mut res);
                return res.success((cases, None));
            }

            if !self.at_keyword(Keyword::AlsoIf) && !self.at_keyword(Keyword::Otherwise) {
                return res.failure(self.syntax_error("expected 'endbody', 'alsoif' or \
                                                      'otherwise'"));
            }

            let (more, otherwise) = register!(res, self.parse_if_tail());
            cases.extend(more);
            return res.success((cases, otherwise));
        }

        let body = register!(res, self.parse_statement());
        let mut cases = vec![IfCase { condition,
                                      body,
                                      yields_null: false }];

        let (more, otherwise) = register!(res, self.parse_if_tail());
        cases.extend(more);
        res.success((cases, otherwise))
    }

    /// Parses whatever follows a case: more cases, an `otherwise` branch, or
    /// nothing.
    fn parse_if_tail(&mut self) -> Parsed<IfChain> {
        if self.at_keyword(Keyword::AlsoIf) {
            return self.parse_if_cases(Keyword::AlsoIf);
        }

        let mut res = Attempt::default();
        if !self.at_keyword(Keyword::Otherwise) {
            return res.success((Vec::new(), None));
        }
        self.advance(&mut res);

        let (body, yields_null) = register!(res, self.parse_body());
        res.success((Vec::new(), Some(Box::new(Branch { body, yields_null }))))
    }

    /// Parses a `walk` loop.
    ///
    /// Syntax: `walk <var> = <start> through <end> [step <step>] then <body>`
    ///
    /// The body is either a single statement or a block closed by `endbody`.
    pub(in crate::interpreter::parser) fn parse_for(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let start_span = self.current().span.clone();
        self.advance(&mut res);

        let (var, _) = require!(res, self.expect_identifier(&mut res));
        require!(res, self.expect(&mut res, &TokenKind::Equals, "="));
        let start = register!(res, self.parse_expression());
        require!(res, self.expect_keyword(&mut res, Keyword::Through));
        let end = register!(res, self.parse_expression());

        let step = if self.at_keyword(Keyword::Step) {
            self.advance(&mut res);
            Some(Box::new(register!(res, self.parse_expression())))
        } else {
            None
        };

        require!(res, self.expect_keyword(&mut res, Keyword::Then));
        let (body, yields_null) = register!(res, self.parse_body());

        let span = start_span.to(&self.previous_span());
        res.success(Node::new(NodeKind::For { var,
                                              start: Box::new(start),
                                              end: Box::new(end),
                                              step,
                                              body: Box::new(body),
                                              yields_null },
                              span))
    }

    /// Parses a `while` loop.
    ///
    /// Syntax: `while <condition> then <body>`
    pub(in crate::interpreter::parser) fn parse_while(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let start = self.current().span.clone();
        self.advance(&mut res);

        let condition = register!(res, self.parse_expression());
        require!(res, self.expect_keyword(&mut res, Keyword::Then));
        let (body, yields_null) = register!(res, self.parse_body());

        let span = start.to(&self.previous_span());
        res.success(Node::new(NodeKind::While { condition: Box::new(condition),
                                                body: Box::new(body),
                                                yields_null },
                              span))
    }

    /// Parses a function definition.
    ///
    /// Syntax:
    /// ```text
    ///     func [name](<param>, ...) -> <expression>
    ///     func [name](<param>, ...)
    ///         <statements>
    ///     endbody
    /// ```
    /// The `->` form returns the value of its expression. The block form
    /// returns only what `give` hands back.
    pub(in crate::interpreter::parser) fn parse_function_def(&mut self) -> Parsed<Node> {
        let mut res = Attempt::default();
        let start = self.current().span.clone();
        self.advance(&mut res);

        let name = if let TokenKind::Identifier(name) = &self.current().kind {
            let name = name.clone();
            self.advance(&mut res);
            Some(name)
        } else {
            None
        };

        if !self.at(&TokenKind::LParen) {
            let expected = if name.is_some() {
                "expected '('"
            } else {
                "expected identifier or '('"
            };
            return res.failure(self.syntax_error(expected));
        }
        self.advance(&mut res);

        let mut params = Vec::new();
        if let TokenKind::Identifier(first) = &self.current().kind {
            params.push(first.clone());
            self.advance(&mut res);

            while self.at(&TokenKind::Comma) {
                self.advance(&mut res);
                let (param, _) = require!(res, self.expect_identifier(&mut res));
                params.push(param);
            }

            if !self.at(&TokenKind::RParen) {
                return res.failure(self.syntax_error("expected ',' or ')'"));
            }
        } else if !self.at(&TokenKind::RParen) {
            return res.failure(self.syntax_error("expected identifier or ')'"));
        }
        self.advance(&mut res);

        let (body, auto_return) = if self.at(&TokenKind::Arrow) {
            self.advance(&mut res);
            (register!(res, self.parse_expression()), true)
        } else if self.at(&TokenKind::Newline) {
            self.advance(&mut res);
            let body = register!(res, self.parse_statements());
            require!(res, self.expect_keyword(&mut res, Keyword::EndBody));
            (body, false)
        } else {
            return res.failure(self.syntax_error("expected '->' or a new line"));
        };

        let span = start.to(&self.previous_span());
        let definition = FunctionDef { name,
                                       params,
                                       body,
                                       auto_return };
        res.success(Node::new(NodeKind::FunctionDef(Rc::new(definition)), span))
    }

    /// Parses the body of a loop or `otherwise` branch.
    ///
    /// A new line starts a block that must be closed by `endbody`; anything
    /// else is a single inline statement.
    ///
    /// # Returns
    /// The body and whether it was a block.
    fn parse_body(&mut self) -> Parsed<(Node, bool)> {
        let mut res = Attempt::default();

        if !self.at(&TokenKind::Newline) {
            let body = register!(res, self.parse_statement());
            return res.success((body, false));
        }

        self.advance(&mut res);
        let body = register!(res, self.parse_statements());
        require!(res, self.expect_keyword(&mut res, Keyword::EndBody));
        res.success((body, true))
    }
}
