use lox_front::run;
use miette::{IntoDiagnostic, WrapErr};
use std::env;
use std::fs;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::process::exit;

fn main() -> miette::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        println!("Usage: lox_front [script]");
        exit(64);
    } else if args.len() == 2 {
        run_file(&args[1])
    } else {
        repl()
    }
}

fn repl() -> miette::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .into_diagnostic()
            .wrap_err("Something went wrong when flushing IO")?;
        let line = match lines.next() {
            Some(line) => line
                .into_diagnostic()
                .wrap_err("Something went wrong when reading the line")?,
            None => break,
        };
        // every line stands on its own, a failed line doesn't affect the next one
        run_source(&line);
    }
    Ok(())
}

fn run_file(filename: &str) -> miette::Result<()> {
    let contents = fs::read_to_string(filename)
        .into_diagnostic()
        .wrap_err_with(|| format!("Something went wrong reading {}", filename))?;
    if !run_source(&contents) {
        exit(65);
    }
    Ok(())
}

/// Prints the rendered tree, or every diagnostic on stderr.
/// Returns whether the source was free of errors.
fn run_source(source: &str) -> bool {
    match run(source) {
        Ok(tree) => {
            println!("{}", tree);
            true
        }
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            false
        }
    }
}
