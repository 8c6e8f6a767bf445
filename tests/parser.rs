use glang::{
    ast::{Node, NodeKind},
    error::{Error, ErrorKind},
    interpreter::{lexer::tokenize, parser::parse},
};
use pretty_assertions::assert_eq;

fn parse_src(src: &str) -> Result<Node, Error> {
    let (tokens, error) = tokenize("<test>", src);
    assert!(error.is_none(), "unexpected lexical error: {error:?}");
    parse(tokens)
}

/// Renders the tree as a compact s-expression, ignoring spans.
fn shape(node: &Node) -> String {
    let all = |nodes: &[Node]| nodes.iter().map(shape).collect::<Vec<_>>().join(" ");

    match &node.kind {
        NodeKind::Number(n) => n.to_string(),
        NodeKind::String(s) => format!("{s:?}"),
        NodeKind::List(items) => format!("[{}]", all(items)),
        NodeKind::Statements(statements) => format!("(do {})", all(statements)),
        NodeKind::VariableAccess(name) => name.clone(),
        NodeKind::VariableAssign { name, value } => format!("(obj {name} {})", shape(value)),
        NodeKind::BinaryOp { left, op, right } => {
            format!("({op} {} {})", shape(left), shape(right))
        },
        NodeKind::UnaryOp { op, operand } => format!("({op} {})", shape(operand)),
        NodeKind::If { cases, otherwise } => {
            let mut out = String::from("(if");
            for case in cases {
                out.push_str(&format!(" {} {}", shape(&case.condition), shape(&case.body)));
            }
            if let Some(branch) = otherwise {
                out.push_str(&format!(" otherwise {}", shape(&branch.body)));
            }
            out + ")"
        },
        NodeKind::For { var,
                        start,
                        end,
                        step,
                        body,
                        .. } => {
            let step = step.as_ref().map_or_else(|| "1".to_string(), |s| shape(s));
            format!("(walk {var} {} {} {step} {})", shape(start), shape(end), shape(body))
        },
        NodeKind::While { condition, body, .. } => {
            format!("(while {} {})", shape(condition), shape(body))
        },
        NodeKind::FunctionDef(def) => {
            format!("(func {} ({}) {}{})",
                    def.name.as_deref().unwrap_or("_"),
                    def.params.join(" "),
                    if def.auto_return { "-> " } else { "" },
                    shape(&def.body))
        },
        NodeKind::Call { callee, args } => format!("(call {} {})", shape(callee), all(args)),
        NodeKind::Return(Some(value)) => format!("(give {})", shape(value)),
        NodeKind::Return(None) => "(give)".to_string(),
        NodeKind::Break => "leave".to_string(),
        NodeKind::Continue => "next".to_string(),
    }
}

fn assert_shape(src: &str, expected: &str) {
    let program = parse_src(src).unwrap_or_else(|e| panic!("parse failed:\n{}", e.render()));
    assert_eq!(shape(&program), expected);
}

fn syntax_error(src: &str) -> Error {
    let error = parse_src(src).expect_err("source should not parse");
    assert_eq!(error.kind, ErrorKind::InvalidSyntax);
    error
}

#[test]
fn arithmetic_precedence() {
    assert_shape("1 + 2 * 3", "(do (+ 1 (* 2 3)))");
    assert_shape("1 - 2 - 3", "(do (- (- 1 2) 3))");
    assert_shape("2 ^ 3 ^ 2", "(do (^ 2 (^ 3 2)))");
    assert_shape("-x ^ 2", "(do (- (^ x 2)))");
    assert_shape("2 ^ -1", "(do (^ 2 (- 1)))");
}

#[test]
fn logic_binds_loosest() {
    assert_shape("a < b and oppositeof c == d",
                 "(do (and (< a b) (oppositeof (== c d))))");
}

#[test]
fn assignment_is_right_recursive() {
    assert_shape("obj a = obj b = 1", "(do (obj a (obj b 1)))");
}

#[test]
fn calls_and_lists() {
    assert_shape("f(1, [2, 3])", "(do (call f 1 [2 3]))");
    assert_shape("f()", "(do (call f ))");
    assert_shape("[]", "(do [])");
}

#[test]
fn statements_and_separators() {
    assert_shape("\n\n1\n\n2; 3\n", "(do 1 2 3)");
}

#[test]
fn inline_if_chain() {
    assert_shape("if a then 1 alsoif b then 2 otherwise 3",
                 "(do (if a 1 b 2 otherwise 3))");
}

#[test]
fn block_if_shares_endbody() {
    assert_shape("if a then\n1\nalsoif b then\n2\notherwise\n3\nendbody",
                 "(do (if a (do 1) b (do 2) otherwise (do 3)))");
}

#[test]
fn walk_with_and_without_step() {
    assert_shape("walk i = 0 through 10 step 2 then i", "(do (walk i 0 10 2 i))");
    assert_shape("walk i = 0 through n then\nbark(i)\nendbody",
                 "(do (walk i 0 n 1 (do (call bark i))))");
}

#[test]
fn function_forms() {
    assert_shape("func add(a, b) -> a + b", "(do (func add (a b) -> (+ a b)))");
    assert_shape("func(x) -> x", "(do (func _ (x) -> x))");
    assert_shape("func f()\ngive 1\nendbody", "(do (func f () (do (give 1))))");
}

#[test]
fn bare_give_and_loop_control() {
    assert_shape("give\nleave\nnext", "(do (give) leave next)");
}

#[test]
fn trailing_tokens_are_rejected() {
    let error = syntax_error("1 2");
    assert_eq!(error.message, "token cannot appear after previous tokens");
    assert_eq!(error.span.start.column, 2);
}

#[test]
fn missing_identifier_after_obj() {
    let error = syntax_error("obj = 5");
    assert_eq!(error.message, "expected identifier");
    assert_eq!(error.span.start.column, 4);
}

#[test]
fn unclosed_block() {
    syntax_error("walk i = 0 through 3 then\nbark(i)\n");
}

#[test]
fn empty_program_is_an_error() {
    syntax_error("");
}
