#![allow(clippy::print_stdout, clippy::print_stderr)]
use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use jsonequaliser::{NodeEvaluationResult, TracingContext};
use serde::Serialize;

/// Check whether a JSON document satisfies the fields and value kinds of a reference document.
#[derive(Parser)]
#[command(name = "jsonequaliser", version)]
struct Cli {
    /// The reference document, defining the required fields. `-` reads from stdin.
    reference: PathBuf,

    /// The candidate document, checked against the reference. `-` reads from stdin.
    candidate: PathBuf,

    /// Print every evaluated node to stderr.
    #[arg(long)]
    trace: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report {
    Verdict { compatible: bool },
    Failure { error: String },
}

const EXIT_INCOMPATIBLE: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_document(path: &Path) -> Result<String, String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|error| format!("failed to read stdin: {error}"))?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
            .map_err(|error| format!("failed to read {}: {error}", path.display()))
    }
}

fn print_trace(ctx: TracingContext) {
    let result = match ctx.result {
        NodeEvaluationResult::Compatible => "compatible",
        NodeEvaluationResult::Incompatible => "incompatible",
        NodeEvaluationResult::Ignored => "ignored",
    };
    let location = ctx.location();
    if location.as_str().is_empty() {
        eprintln!("{result} /");
    } else {
        eprintln!("{result} {location}");
    }
}

fn check(cli: &Cli) -> Result<bool, String> {
    if is_stdin(&cli.reference) && is_stdin(&cli.candidate) {
        return Err("only one document can be read from stdin".to_string());
    }
    let reference = read_document(&cli.reference)?;
    let candidate = read_document(&cli.candidate)?;
    let verdict = if cli.trace {
        jsonequaliser::is_compatible_with_tracing(&reference, &candidate, &mut print_trace)
    } else {
        jsonequaliser::is_compatible(&reference, &candidate)
    };
    verdict.map_err(|error| error.to_string())
}

fn report(output: Output, result: &Result<bool, String>) {
    match output {
        Output::Text => match result {
            Ok(true) => println!("compatible"),
            Ok(false) => println!("incompatible"),
            Err(error) => eprintln!("error: {error}"),
        },
        Output::Json => {
            let report = match result {
                Ok(compatible) => Report::Verdict {
                    compatible: *compatible,
                },
                Err(error) => Report::Failure {
                    error: error.clone(),
                },
            };
            match serde_json::to_string(&report) {
                Ok(serialized) => println!("{serialized}"),
                Err(error) => eprintln!("error: failed to serialize report: {error}"),
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = check(&cli);
    report(cli.output, &result);
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INCOMPATIBLE),
        Err(_) => ExitCode::from(EXIT_ERROR),
    }
}
