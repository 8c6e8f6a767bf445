use std::{fs, rc::Rc};

use glang::{
    PROGRAM_FRAME,
    error::{Error, ErrorKind},
    host::MemoryHost,
    interpreter::{
        evaluator::{context::Context, core::Interpreter, environment::Environment},
        value::core::Value,
    },
    run_with_host,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path().extension().is_some_and(|ext| {
                                                                          ext == "glang"
                                                                      })
                                              })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let name = path.display().to_string();
        if let Err(e) = run_with_host(&name, &content, &mut MemoryHost::default()) {
            panic!("Script {path:?} failed:\n{}", e.render());
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").expect("README.md should exist");
    let blocks = extract_glang_blocks(&content);

    assert!(!blocks.is_empty(), "No glang examples found in README.md");
    for (i, code) in blocks.iter().enumerate() {
        if let Err(e) = run_with_host("README.md", code, &mut MemoryHost::default()) {
            panic!("Example {} in README.md failed:\n{code}\n{}", i + 1, e.render());
        }
    }
}

fn extract_glang_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```glang") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run(src: &str) -> Result<Value, Error> {
    run_with_host("<test>", src, &mut MemoryHost::default())
}

/// Runs `src` and returns the value of its last top-level statement.
fn last_value(src: &str) -> Value {
    let program = run(src).unwrap_or_else(|e| panic!("Script failed:\n{}", e.render()));
    program.as_list()
           .and_then(|values| values.elements().pop())
           .unwrap_or_else(|| panic!("Script produced no statement values: {program:?}"))
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed:\n{}", e.render());
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind, kind, "unexpected error:\n{}", e.render());
            e
        },
    }
}

fn numbers(values: &[f64]) -> Value {
    Value::list(values.iter().copied().map(Value::number).collect())
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(last_value("obj x = 1 + 2\nx"), Value::number(3.0));
    assert_eq!(last_value("obj x = 7 * 9"), Value::number(63.0));
    assert_eq!(last_value("8 - 5"), Value::number(3.0));
    assert_eq!(last_value("10 / 4"), Value::number(2.5));
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(last_value("2 + 3 * 4"), Value::number(14.0));
    assert_eq!(last_value("(2 + 3) * 4"), Value::number(20.0));
    assert_eq!(last_value("2 ^ 3 ^ 2"), Value::number(512.0));
    assert_eq!(last_value("-2 ^ 2"), Value::number(-4.0));
    assert_eq!(last_value("10 - 2 - 3"), Value::number(5.0));
}

#[test]
fn program_value_lists_every_statement() {
    assert_eq!(run("1; 2\n3").unwrap(), numbers(&[1.0, 2.0, 3.0]));
}

#[test]
fn comparisons_and_logic_produce_numbers() {
    assert_eq!(last_value("3 < 4"), Value::number(1.0));
    assert_eq!(last_value("3 >= 4"), Value::number(0.0));
    assert_eq!(last_value("1 and 0"), Value::number(0.0));
    assert_eq!(last_value("0 or \"x\""), Value::number(1.0));
    assert_eq!(last_value("oppositeof []"), Value::number(1.0));
    assert_eq!(last_value("oppositeof 1 == 1"), Value::number(0.0));
    assert_eq!(last_value("true and oppositeof false"), Value::number(1.0));
}

#[test]
fn division_by_zero_points_at_the_divisor() {
    let error = assert_failure("obj x = 1 / 0", ErrorKind::DivisionByZero);

    assert_eq!(error.message, "division by zero");
    assert_eq!(error.span.start.column, 12);
}

#[test]
fn undefined_variable() {
    let error = assert_failure("obj y = x + 1", ErrorKind::UndefinedVariable);
    assert_eq!(error.message, "'x' is not defined");
}

#[test]
fn illegal_operations() {
    let error = assert_failure("\"a\" - 1", ErrorKind::IllegalOperation);
    assert_eq!(error.message, "cannot apply '-' to a string and a number");

    assert_failure("1 + \"a\"", ErrorKind::IllegalOperation);
    assert_failure("\"ab\" * -1", ErrorKind::IllegalOperation);
    assert_failure("\"ab\" * 1.5", ErrorKind::IllegalOperation);
    assert_failure("-\"a\"", ErrorKind::IllegalOperation);
    assert_failure("bark + 1", ErrorKind::IllegalOperation);
    assert_failure("obj x = 3\nx(1)", ErrorKind::IllegalOperation);
}

#[test]
fn string_operators() {
    assert_eq!(last_value("\"ab\" + \"cd\""), Value::string("abcd"));
    assert_eq!(last_value("\"ab\" * 3"), Value::string("ababab"));
    assert_eq!(last_value("\"ab\" * 0"), Value::string(""));
    assert_eq!(last_value("\"ab\" == \"ab\""), Value::number(1.0));
    assert_eq!(last_value("\"ab\" != \"ab\""), Value::number(0.0));
}

#[test]
fn oversized_string_repetition_is_an_error() {
    let error = assert_failure("obj s = \"x\" * 4096\ns * 9000000000000000",
                               ErrorKind::IllegalOperation);
    assert_eq!(error.message, "repeated string would be too long");
}

#[test]
fn long_integer_literals_are_numbers() {
    assert_eq!(last_value("99999999999999999999"), Value::number(1e20));
    assert_eq!(last_value("9007199254740993 - 1"), Value::number(9_007_199_254_740_991.0));
}

#[test]
fn list_indexing_and_removal() {
    assert_eq!(last_value("[10, 20, 30] ^ 1"), Value::number(20.0));
    assert_eq!(last_value("[10, 20, 30] - 0"), numbers(&[20.0, 30.0]));
    assert_eq!(last_value("[1] + [2, 3]"), numbers(&[1.0, 2.0, 3.0]));
    assert_eq!(last_value("[1] * 2"), numbers(&[1.0, 2.0]));

    let error = assert_failure("[1, 2] ^ 5", ErrorKind::IndexOutOfRange);
    assert_eq!(error.message, "index is out of bounds");
    assert_failure("[1, 2] - -1", ErrorKind::IndexOutOfRange);
    assert_failure("[1, 2] ^ 0.5", ErrorKind::IndexOutOfRange);
}

#[test]
fn list_equality_is_deep() {
    assert_eq!(last_value("[1, [2, \"a\"]] == [1, [2, \"a\"]]"), Value::number(1.0));
    assert_eq!(last_value("[1, 2] == [1, 2, 3]"), Value::number(0.0));
    assert_eq!(last_value("[1, 2] != [2, 1]"), Value::number(1.0));
}

#[test]
fn stored_lists_never_alias() {
    assert_eq!(last_value("obj a = [1, 2]\nobj b = a\nappend(b, 3)\na"),
               numbers(&[1.0, 2.0]));
    assert_eq!(last_value("obj a = [1, 2]\nobj b = a * 3\na"), numbers(&[1.0, 2.0]));
    assert_eq!(last_value("obj a = [1]\nobj b = [a]\nappend(a, 2)\nb ^ 0"),
               numbers(&[1.0]));
}

#[test]
fn builtins_mutate_their_argument() {
    assert_eq!(last_value("obj a = [1]\nappend(a, 2)\na"), numbers(&[1.0, 2.0]));
    assert_eq!(last_value("obj a = [1, 2]\nextend(a, a)\na"),
               numbers(&[1.0, 2.0, 1.0, 2.0]));
}

#[test]
fn conditionals() {
    assert_eq!(last_value("if 1 then \"yes\" otherwise \"no\""), Value::string("yes"));
    assert_eq!(last_value("if 0 then \"yes\" otherwise \"no\""), Value::string("no"));
    assert_eq!(last_value("if 0 then 1 alsoif 1 then 2 otherwise 3"), Value::number(2.0));
    assert_eq!(last_value("if 0 then 1"), Value::number(0.0));
    assert_eq!(last_value("obj x = 0\nif 1 then\nobj x = 5\nendbody\nx"), Value::number(5.0));
    assert_eq!(last_value("if 1 then\n7\nendbody"), Value::number(0.0));
}

#[test]
fn walk_collects_iterations() {
    assert_eq!(last_value("walk i = 0 through 5 then i"),
               numbers(&[0.0, 1.0, 2.0, 3.0, 4.0]));
    assert_eq!(last_value("walk i = 5 through 0 step -2 then i"),
               numbers(&[5.0, 3.0, 1.0]));
    assert_eq!(last_value("walk i = 0 through 0 then i"), numbers(&[]));
    assert_eq!(last_value("walk i = 0 through 3 then i\ni"), Value::number(2.0));
}

#[test]
fn walk_leave_and_next() {
    assert_eq!(last_value("walk i = 0 through 10 then if i == 3 then leave otherwise i"),
               numbers(&[0.0, 1.0, 2.0]));
    assert_eq!(last_value("walk i = 0 through 5 then if i == 2 then next otherwise i"),
               numbers(&[0.0, 1.0, 3.0, 4.0]));
}

#[test]
fn walk_rejects_bad_bounds() {
    let error = assert_failure("walk i = 0 through 3 step 0 then i", ErrorKind::IllegalOperation);
    assert_eq!(error.message, "walk step cannot be zero");

    assert_failure("walk i = \"a\" through 3 then i", ErrorKind::TypeMismatch);
}

#[test]
fn block_loops_yield_null() {
    let src = "obj total = 0\nobj r = walk i = 1 through 4 then\nobj total = total + i\nendbody\n\
               [total, r]";
    assert_eq!(last_value(src), numbers(&[6.0, 0.0]));
}

#[test]
fn while_loops() {
    assert_eq!(last_value("obj n = 0\nwhile n < 3 then obj n = n + 1"),
               numbers(&[1.0, 2.0, 3.0]));
    assert_eq!(last_value("obj n = 0\nwhile 1 then if n == 2 then leave otherwise obj n = n + 1\nn"),
               Value::number(2.0));
}

#[test]
fn inline_functions_return_their_body() {
    assert_eq!(last_value("func add(a, b) -> a + b\nadd(2, 3)"), Value::number(5.0));
    assert_eq!(last_value("obj sq = func(x) -> x * x\nsq(4)"), Value::number(16.0));
}

#[test]
fn arity_is_checked() {
    let error = assert_failure("func add(a, b) -> a + b\nadd(1)", ErrorKind::ArityMismatch);
    assert_eq!(error.message, "'add' takes 2 positional argument(s) but the program gave 1");

    let error = assert_failure("length()", ErrorKind::ArityMismatch);
    assert_eq!(error.message, "'length' takes 1 positional argument(s) but the program gave 0");
}

#[test]
fn block_functions_need_give() {
    assert_eq!(last_value("func f()\n5\nendbody\nf()"), Value::number(0.0));
    assert_eq!(last_value("func f()\ngive 5\nbark(\"unreachable\")\nendbody\nf()"),
               Value::number(5.0));
    assert_eq!(last_value("func f()\ngive\nendbody\nf()"), Value::number(0.0));
}

#[test]
fn recursion_and_closures() {
    let src = "func fact(n)\nif n <= 1 then give 1\ngive n * fact(n - 1)\nendbody\nfact(5)";
    assert_eq!(last_value(src), Value::number(120.0));

    let src = "func counter(start)\nfunc bump(step) -> start + step\ngive bump\nendbody\n\
               obj inc = counter(10)\ninc(5)";
    assert_eq!(last_value(src), Value::number(15.0));
}

#[test]
fn named_functions_let_their_scope_drop() {
    let env = Environment::root();
    let mut host = MemoryHost::default();
    let result = Interpreter::new(&mut host).execute_source("<test>",
                                                             "func f() -> 1\nobj g = f\ng()",
                                                             &env,
                                                             &Context::root(PROGRAM_FRAME));
    assert!(result.is_ok());
    drop(result);

    let scope = Rc::downgrade(&env);
    drop(env);
    assert!(scope.upgrade().is_none(), "the program's scope outlived the program");
}

#[test]
fn functions_compare_by_definition_and_scope() {
    let env = Environment::root();
    let mut host = MemoryHost::default();
    Interpreter::new(&mut host).execute_source("<test>",
                                               "func f() -> 1\nobj g = f\nfunc h() -> 1",
                                               &env,
                                               &Context::root(PROGRAM_FRAME))
                               .unwrap();

    let env = env.borrow();
    assert_eq!(env.get("f"), env.get("g"));
    assert_ne!(env.get("f"), env.get("h"));
}

#[test]
fn assignment_inside_functions_is_local() {
    assert_eq!(last_value("obj x = 1\nfunc f() -> obj x = 2\nf()\nx"), Value::number(1.0));
}

#[test]
fn top_level_give_stops_the_program() {
    let mut host = MemoryHost::default();
    let value = run_with_host("<test>", "give 5\nbark(1)", &mut host).unwrap();

    assert_eq!(value, Value::number(5.0));
    assert!(host.output().is_empty());
}

#[test]
fn top_level_leave_returns_null() {
    assert_eq!(run("leave\n1").unwrap(), Value::null());
}

#[test]
fn user_errors() {
    let error = assert_failure("uhoh(\"boom\")", ErrorKind::UserError);
    assert_eq!(error.message, "boom");
}

#[test]
fn comments_and_semicolons() {
    assert_success("# nothing to see\nobj x = 1; obj y = 2 # trailing\nx + y");
}
