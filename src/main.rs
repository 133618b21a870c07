use clap::Parser;
use search_bench::request::{resolve, ResolveError};
use search_bench::{dataset, report};
use std::process::ExitCode;

/// Run one search algorithm over an ascending dataset and report the result.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Algorithm selector: `b` for binary, `s` for sequential.
    selector: Option<String>,

    /// Number of elements in the dataset.
    count: Option<String>,

    /// Print the report as a JSON line instead of the human-readable one.
    #[arg(long)]
    json: bool,

    /// Increase stderr log verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// Exit codes: 1 = nothing to dispatch, 2 = malformed count, 3 = search miss.
const EXIT_NO_DISPATCH: u8 = 1;
const EXIT_PARSE_FAILURE: u8 = 2;
const EXIT_SEARCH_MISS: u8 = 3;

fn main() -> ExitCode {
    let args = Args::parse();

    stderrlog::new()
        .color(stderrlog::ColorChoice::Always)
        .verbosity(args.verbose as usize + 1)
        .show_level(true)
        .init()
        .unwrap();

    let request = match resolve(args.selector.as_deref(), args.count.as_deref()) {
        Ok(request) => request,
        Err(err) => {
            println!("{err}, terminating");
            let code = match err {
                ResolveError::InvalidCount { .. } => EXIT_PARSE_FAILURE,
                _ => EXIT_NO_DISPATCH,
            };
            return ExitCode::from(code);
        }
    };

    let vals = dataset::ascending(request.len);
    let report = report::run(&request, &vals);

    if args.json {
        println!("{}", serde_json::to_string(&report).unwrap());
    } else {
        println!("{}", report.human_line());
    }

    if report.found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_SEARCH_MISS)
    }
}
