use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
    process::ExitCode,
};

use clap::Parser;
use glang::{Session, error::Error, host::StdHost, interpreter::value::core::ValueKind};

/// The extension every glang program must carry.
const EXTENSION: &str = "glang";

/// glang is a small dynamically typed scripting language.
///
/// Without arguments an interactive prompt starts; type `exit()` to leave it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A `.glang` program to run.
    file: Option<String>,

    /// Runs the given code instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Prints the value the program evaluates to.
    #[arg(short, long)]
    print_result: bool,
}

fn main() -> ExitCode {
    glang::init_tracing();
    let args = Args::parse();

    if let Some(code) = &args.eval {
        return run_once("<eval>", code, args.print_result);
    }

    let Some(path) = &args.file else {
        return repl();
    };

    if Path::new(path).extension().is_none_or(|ext| ext != EXTENSION) {
        eprintln!("Wrong File Type: '{path}' is not a .{EXTENSION} file");
        return ExitCode::FAILURE;
    }

    match fs::read_to_string(path) {
        Ok(text) => run_once(path, &text, args.print_result),
        Err(e) => {
            eprintln!("Failed to read the input file '{path}': {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_once(source_name: &str, text: &str, print_result: bool) -> ExitCode {
    match glang::run(source_name, text) {
        Ok(value) => {
            if print_result {
                println!("{}", value.repr());
            }
            ExitCode::SUCCESS
        },
        Err(error) => report(&error),
    }
}

fn report(error: &Error) -> ExitCode {
    eprintln!("{}", error.render());
    ExitCode::FAILURE
}

/// Reads lines from standard input and runs each one in a shared session.
///
/// A line that produces a single value prints that value; a line with
/// several statements prints all of them.
fn repl() -> ExitCode {
    let mut session = Session::new();
    let mut host = StdHost;
    let stdin = io::stdin();

    loop {
        print!("glang > ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit()" {
            return ExitCode::SUCCESS;
        }

        match session.run("<stdin>", line, &mut host) {
            Ok(value) => match &value.kind {
                ValueKind::List(values) if values.len() == 1 => {
                    if let Some(only) = values.get(0) {
                        println!("{}", only.repr());
                    }
                },
                _ => println!("{}", value.repr()),
            },
            Err(error) => {
                report(&error);
            },
        }
    }
}
