use glang::{error::Error, host::MemoryHost, run_with_host};
use pretty_assertions::assert_eq;

fn render(src: &str) -> String {
    run_with_host("<test>", src, &mut MemoryHost::default()).map_or_else(|e: Error| e.render(),
                                                                         |v| {
                                                                             panic!("expected an \
                                                                                     error, got \
                                                                                     {v:?}")
                                                                         })
}

#[test]
fn illegal_character() {
    assert_eq!(render("obj x = 5 @"),
               "Illegal Character: '@'\nFile \"<test>\", Line 1\n\nobj x = 5 @\n          ^");
}

#[test]
fn syntax_error_has_no_traceback() {
    assert_eq!(render("obj = 5"),
               "Invalid Syntax: expected identifier\nFile \"<test>\", Line 1\n\nobj = 5\n    ^");
}

#[test]
fn runtime_error_on_a_later_line() {
    assert_eq!(render("obj a = 1\nobj b = a / 0"),
               "Traceback (most recent call last):\n  File <test>, Line 2, In <program>\n\
                Division By Zero: division by zero\nFile \"<test>\", Line 2\n\n\
                obj b = a / 0\n            ^");
}

#[test]
fn traceback_lists_frames_outermost_first() {
    let src = "func f(x) -> x / 0\nf(1)";

    assert_eq!(render(src),
               "Traceback (most recent call last):\n  File <test>, Line 2, In <program>\n  \
                File <test>, Line 1, In f\nDivision By Zero: division by zero\n\
                File \"<test>\", Line 1\n\nfunc f(x) -> x / 0\n                 ^");
}

#[test]
fn nested_calls() {
    let src = "func inner() -> uhoh(\"deep\")\nfunc outer() -> inner()\nouter()";

    assert_eq!(render(src),
               "Traceback (most recent call last):\n  File <test>, Line 3, In <program>\n  \
                File <test>, Line 2, In outer\n  File <test>, Line 1, In inner\n  \
                File <test>, Line 1, In uhoh\nUser Error: deep\nFile \"<test>\", Line 1\n\n\
                func inner() -> uhoh(\"deep\")\n                ^^^^^^^^^^^^");
}

#[test]
fn binary_errors_underline_both_operands() {
    assert_eq!(render("[1] - \"x\""),
               "Traceback (most recent call last):\n  File <test>, Line 1, In <program>\n\
                Illegal Operation: cannot apply '-' to a list and a string\n\
                File \"<test>\", Line 1\n\n[1] - \"x\"\n^^^^^^^^^");
}

#[test]
fn index_errors_point_at_the_index() {
    assert_eq!(render("[1, 2] ^ 7"),
               "Traceback (most recent call last):\n  File <test>, Line 1, In <program>\n\
                Index Out Of Range: index is out of bounds\nFile \"<test>\", Line 1\n\n\
                [1, 2] ^ 7\n         ^");
}

#[test]
fn unterminated_string_spans_to_the_end() {
    assert_eq!(render("bark(\"hi"),
               "Unterminated String: string literal is missing its closing '\"'\n\
                File \"<test>\", Line 1\n\nbark(\"hi\n     ^^^");
}

#[test]
fn tab_indented_lines_keep_carets_aligned() {
    assert_eq!(render("func f()\n\tobj x = 1 / 0\nendbody\nf()"),
               "Traceback (most recent call last):\n  File <test>, Line 4, In <program>\n  \
                File <test>, Line 2, In f\nDivision By Zero: division by zero\n\
                File \"<test>\", Line 2\n\n obj x = 1 / 0\n             ^");
}
