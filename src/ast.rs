use std::{fmt, rc::Rc};

use crate::interpreter::position::Span;

/// A node of the abstract syntax tree, with the source range it was parsed
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What the node is.
    pub kind: NodeKind,
    /// Where it came from, used for diagnostics and value spans.
    pub span: Span,
}

impl Node {
    /// Creates a node.
    #[must_use]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Every construct of the language.
///
/// The tree is strictly owned parent to child. Function bodies sit behind an
/// `Rc` so function values created at runtime can share them.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A number literal. Integer and float literals both become `f64`.
    Number(f64),
    /// A string literal, escapes already translated.
    String(String),
    /// A list literal such as `[1, 2, 3]`.
    List(Vec<Node>),
    /// A sequence of statements: a block body or a whole program.
    ///
    /// Evaluates to a list holding the value of every statement.
    Statements(Vec<Node>),
    /// Reads a variable.
    VariableAccess(String),
    /// `obj name = value`
    VariableAssign {
        /// The variable being assigned.
        name:  String,
        /// The assigned expression.
        value: Box<Node>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Node>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Node>,
    },
    /// A prefix operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Node>,
    },
    /// `if ... then ... alsoif ... otherwise ...`
    If {
        /// The `if` case followed by every `alsoif` case, in source order.
        cases:     Vec<IfCase>,
        /// The `otherwise` branch.
        otherwise: Option<Box<Branch>>,
    },
    /// `walk i = start through end step s then ...`
    For {
        /// The loop variable.
        var:         String,
        /// Initial value of the loop variable.
        start:       Box<Node>,
        /// Exclusive bound.
        end:         Box<Node>,
        /// Increment, `1` when omitted.
        step:        Option<Box<Node>>,
        /// The loop body.
        body:        Box<Node>,
        /// Whether the body is a block, making the loop evaluate to null.
        yields_null: bool,
    },
    /// `while condition then ...`
    While {
        /// Tested before every iteration.
        condition:   Box<Node>,
        /// The loop body.
        body:        Box<Node>,
        /// Whether the body is a block, making the loop evaluate to null.
        yields_null: bool,
    },
    /// `func name(a, b) -> ...` or a block-bodied function.
    FunctionDef(Rc<FunctionDef>),
    /// Calls the value of `callee` with the given arguments.
    Call {
        /// The called expression.
        callee: Box<Node>,
        /// Arguments, evaluated left to right.
        args:   Vec<Node>,
    },
    /// `give` with an optional value.
    Return(Option<Box<Node>>),
    /// `leave`
    Break,
    /// `next`
    Continue,
}

/// One `if` or `alsoif` case.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCase {
    /// The case is taken when this is truthy.
    pub condition:   Node,
    /// Evaluated when the case is taken.
    pub body:        Node,
    /// Whether the body is a block, making the `if` evaluate to null.
    pub yields_null: bool,
}

/// The `otherwise` branch of an `if`.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Evaluated when no case is taken.
    pub body:        Node,
    /// Whether the body is a block, making the `if` evaluate to null.
    pub yields_null: bool,
}

/// A function definition, shared between the tree and the function values it
/// creates.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// `None` for anonymous functions.
    pub name:        Option<String>,
    /// Parameter names. The arity is fixed.
    pub params:      Vec<String>,
    /// The function body.
    pub body:        Node,
    /// `true` for `->` bodies, whose value is the call result.
    pub auto_return: bool,
}

/// Binary operators.
///
/// `Pow` is exponentiation on numbers and indexing on lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `and`
    And,
    /// `or`
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Pow => "^",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                        Self::Less => "<",
                        Self::Greater => ">",
                        Self::LessEqual => "<=",
                        Self::GreaterEqual => ">=",
                        Self::And => "and",
                        Self::Or => "or",
                    })
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
    /// `oppositeof x`
    OppositeOf,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Plus => "+",
                        Self::Minus => "-",
                        Self::OppositeOf => "oppositeof",
                    })
    }
}
