use glang::{
    error::{Error, ErrorKind},
    host::MemoryHost,
    interpreter::{
        evaluator::{environment::Environment, function::builtin::Builtin},
        value::core::Value,
    },
    run_with_host,
};
use pretty_assertions::assert_eq;

fn run_in(host: &mut MemoryHost, src: &str) -> Result<Value, Error> {
    run_with_host("<test>", src, host)
}

fn last_value(host: &mut MemoryHost, src: &str) -> Value {
    let program = run_in(host, src).unwrap_or_else(|e| panic!("Script failed:\n{}", e.render()));
    program.as_list()
           .and_then(|values| values.elements().pop())
           .expect("the program should have statements")
}

fn failure(host: &mut MemoryHost, src: &str, kind: ErrorKind) -> Error {
    let error = run_in(host, src).expect_err("the program should fail");
    assert_eq!(error.kind, kind, "unexpected error:\n{}", error.render());
    error
}

#[test]
fn prelude_binds_every_builtin_and_constant() {
    let prelude = Environment::prelude();
    let prelude = prelude.borrow();

    for builtin in Builtin::ALL {
        assert!(prelude.local(builtin.name()).is_some(), "{} is missing", builtin.name());
    }
    for constant in ["null", "false", "true", "pi"] {
        assert!(prelude.local(constant).is_some(), "{constant} is missing");
    }
}

#[test]
fn bark_prints_display_forms() {
    let mut host = MemoryHost::default();
    run_in(&mut host,
           "bark(5)\nbark(2.5)\nbark(\"raw\")\nbark([1, \"a\", [2]])\nbark(bark)\nfunc f() -> 1\n\
            bark(f)\nbark(func() -> 1)").unwrap();

    assert_eq!(host.output(),
               ["5",
                "2.5",
                "raw",
                "1, \"a\", [2]",
                "<built-in function bark>",
                "<function f>",
                "<function <anonymous>>"]);
}

#[test]
fn chew_reads_lines() {
    let mut host = MemoryHost::default().with_input("Rex").with_input(" 42 ");

    assert_eq!(last_value(&mut host, "obj name = chew()\nobj age = chewnum()\n[name, age]"),
               Value::list(vec![Value::string("Rex"), Value::number(42.0)]));
}

#[test]
fn chewnum_rejects_non_integers() {
    let mut host = MemoryHost::default().with_input("4.5");
    let error = failure(&mut host, "chewnum()", ErrorKind::InvalidInput);

    assert_eq!(error.message, "'4.5' is not an integer");
}

#[test]
fn reading_past_the_input_is_an_io_error() {
    failure(&mut MemoryHost::default(), "chew()", ErrorKind::Io);
}

#[test]
fn type_tests_and_conversions() {
    let mut host = MemoryHost::default();

    assert_eq!(last_value(&mut host, "[isnumber(1), isstring(1), islist([]), isfunction(bark)]"),
               Value::list(vec![Value::number(1.0),
                                Value::number(0.0),
                                Value::number(1.0),
                                Value::number(1.0)]));
    assert_eq!(last_value(&mut host, "type(bark)"), Value::string("built-in function"));
    assert_eq!(last_value(&mut host, "tonumber(\" 12 \") + 1"), Value::number(13.0));
    assert_eq!(last_value(&mut host, "tonumber(7)"), Value::number(7.0));
    assert_eq!(last_value(&mut host, "tostring([1, 2])"), Value::string("1, 2"));

    failure(&mut host, "tonumber(\"seven\")", ErrorKind::InvalidInput);
    failure(&mut host, "tonumber(\"inf\")", ErrorKind::InvalidInput);
    failure(&mut host, "tonumber([])", ErrorKind::TypeMismatch);
}

#[test]
fn list_builtins() {
    let mut host = MemoryHost::default();

    assert_eq!(last_value(&mut host, "obj a = [1, 2, 3]\nobj x = pop(a, 1)\n[x, a]"),
               Value::list(vec![Value::number(2.0),
                                Value::list(vec![Value::number(1.0), Value::number(3.0)])]));
    assert_eq!(last_value(&mut host, "length([1, 2]) + length(\"abc\")"), Value::number(5.0));

    let error = failure(&mut host, "pop([], 0)", ErrorKind::IndexOutOfRange);
    assert_eq!(error.message, "index is out of bounds");
}

#[test]
fn type_mismatches_name_the_parameter() {
    let mut host = MemoryHost::default();

    let error = failure(&mut host, "append(1, 2)", ErrorKind::TypeMismatch);
    assert_eq!(error.message, "'list' must be a list, not a number");

    let error = failure(&mut host, "extend([], \"ab\")", ErrorKind::TypeMismatch);
    assert_eq!(error.message, "'list_b' must be a list, not a string");

    let error = failure(&mut host, "length(5)", ErrorKind::TypeMismatch);
    assert_eq!(error.message, "'obj' must be a list or a string, not a number");
}

#[test]
fn files_round_trip() {
    let mut host = MemoryHost::default();

    assert_eq!(last_value(&mut host, "bury(\"out.txt\", [1, 2])\ndig(\"out.txt\")"),
               Value::string("1, 2"));
    assert_eq!(host.file("out.txt"), Some("1, 2"));

    let error = failure(&mut host, "dig(\"missing.txt\")", ErrorKind::FileNotFound);
    assert_eq!(error.message, "'missing.txt' does not exist");
}

#[test]
fn run_executes_in_a_fresh_environment() {
    let mut host = MemoryHost::default().with_file("other.glang", "obj secret = 1\nbark(\"ran\")");

    assert_eq!(last_value(&mut host, "run(\"other.glang\")\nisnumber(1)"), Value::number(1.0));
    assert_eq!(host.output(), ["ran"]);
    failure(&mut host, "run(\"other.glang\")\nsecret", ErrorKind::UndefinedVariable);
}

#[test]
fn fetch_imports_everything() {
    let mut host =
        MemoryHost::default().with_file("lib.glang", "obj answer = 42\nfunc double(x) -> x * 2");

    assert_eq!(last_value(&mut host, "fetch([\"*all\"], \"lib.glang\")\ndouble(answer)"),
               Value::number(84.0));
}

#[test]
fn fetch_imports_named_symbols() {
    let mut host = MemoryHost::default().with_file("lib.glang",
                                                   "obj base = 10\nfunc add_base(x) -> x + base");

    assert_eq!(last_value(&mut host, "fetch([\"add_base\"], \"lib.glang\")\nadd_base(1)"),
               Value::number(11.0));
    failure(&mut host, "fetch([\"add_base\"], \"lib.glang\")\nbase", ErrorKind::UndefinedVariable);
}

#[test]
fn fetch_reports_missing_symbols_and_modules() {
    let mut host = MemoryHost::default().with_file("lib.glang", "obj answer = 42");

    let error = failure(&mut host, "fetch([\"nope\"], \"lib.glang\")", ErrorKind::SymbolNotFound);
    assert_eq!(error.message, "'nope' is not defined in module 'lib.glang'");

    failure(&mut host, "fetch([\"*all\"], \"gone.glang\")", ErrorKind::ModuleNotFound);
    failure(&mut host, "fetch([1], \"lib.glang\")", ErrorKind::TypeMismatch);
}

#[test]
fn module_errors_propagate() {
    let mut host = MemoryHost::default().with_file("broken.glang", "obj = 1");
    failure(&mut host, "fetch([\"*all\"], \"broken.glang\")", ErrorKind::InvalidSyntax);
}

#[test]
fn imported_lists_are_copies() {
    let mut host = MemoryHost::default().with_file("lib.glang", "obj items = [1]");

    let src = "fetch([\"*all\"], \"lib.glang\")\nappend(items, 2)\nitems";
    assert_eq!(last_value(&mut host, src),
               Value::list(vec![Value::number(1.0), Value::number(2.0)]));
}
