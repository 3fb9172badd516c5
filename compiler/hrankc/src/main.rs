//! hrank CLI
//!
//! Structural type inference for concatenative programs and lambda terms.

use hrank_cat::CatTypeEnv;
use hrank_types::Naming;
use hrankc::commands::{batch_file, combinators, infer_cat, infer_term, library, unify};
use hrankc::{init_tracing, parse_infer_options, CliError, InferOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "cat" => run_cat(&args[2..]),
        "lambda" => run_lambda(&args[2..]),
        "unify" => {
            if args.len() != 4 {
                eprintln!("Usage: hrank unify <type> <type>");
                std::process::exit(1);
            }
            unify(&args[2], &args[3])
        }
        "library" => parse_infer_options(&args[2..], InferOptions::default())
            .and_then(|(options, _)| library(&standard_env()?, &options)),
        "combinators" => parse_infer_options(&args[2..], lambda_defaults())
            .and_then(|(options, _)| combinators(&options)),
        "batch" => run_batch(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run_cat(args: &[String]) -> Result<String, CliError> {
    let (options, positional) = parse_infer_options(args, InferOptions::default())?;
    let [program] = positional.as_slice() else {
        eprintln!("Usage: hrank cat <program> [--reverse] [--alpha] [--pretty] [--check]");
        std::process::exit(1);
    };
    infer_cat(program, &standard_env()?, &options)
}

fn run_lambda(args: &[String]) -> Result<String, CliError> {
    let (options, positional) = parse_infer_options(args, lambda_defaults())?;
    let [term] = positional.as_slice() else {
        eprintln!("Usage: hrank lambda <term | combinator> [--numeric] [--pretty] [--check]");
        std::process::exit(1);
    };
    infer_term(term, &options)
}

fn run_batch(args: &[String]) -> Result<String, CliError> {
    let (options, positional) = parse_infer_options(args, InferOptions::default())?;
    let [path] = positional.as_slice() else {
        eprintln!("Usage: hrank batch <file> [--reverse] [--alpha] [--pretty] [--check]");
        std::process::exit(1);
    };
    let report = batch_file(path, &standard_env()?, &options)?;
    let output = report.lines.join("\n");
    if report.failures > 0 {
        println!("{output}");
        eprintln!("{} of {} programs failed", report.failures, report.lines.len());
        std::process::exit(1);
    }
    Ok(output)
}

fn standard_env() -> Result<CatTypeEnv, CliError> {
    Ok(CatTypeEnv::standard()?)
}

/// Lambda types read best with letters.
fn lambda_defaults() -> InferOptions {
    InferOptions {
        naming: Naming::Alphabetic,
        ..InferOptions::default()
    }
}

fn print_usage() {
    eprintln!("hrank - structural type inference with higher-rank polymorphism");
    eprintln!();
    eprintln!("Usage: hrank <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  cat <program>       Infer the stack effect of a concatenative program");
    eprintln!("  lambda <term>       Infer the type of a lambda term or named combinator");
    eprintln!("  unify <type> <type> Unify two type expressions and show the bindings");
    eprintln!("  library             List primitive and library words with their types");
    eprintln!("  combinators         List the classic lambda terms with their types");
    eprintln!("  batch <file>        Infer one concatenative program per line");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --reverse       Compose right to left");
    eprintln!("  -a, --alpha         Name variables a, b, c, ...");
    eprintln!("  -n, --numeric       Name variables t0, t1, t2, ...");
    eprintln!("  -p, --pretty        Print stacks flattened: (a b -> b a)");
    eprintln!("  -c, --check         Fail on recursive or undetermined types");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG            Enable tracing, e.g. RUST_LOG=hrank_types=debug");
    eprintln!("  HRANK_LOG_TREE=1    Show tracing output as an indented tree");
}
