use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser, ValueEnum};
use graph_calculator::{
    Strategy,
    repl::{self, ReplConfig, print_evaluation},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// graph-calculator evaluates space-separated integer expressions by
/// contracting a graph of numbers and operators.
///
/// Without an expression it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells graph-calculator to read expressions, one per line, from a file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// How the next operator to contract is selected.
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Scan)]
    strategy: StrategyArg,

    /// Prints every contraction before the result.
    #[arg(short, long)]
    explain: bool,

    /// Skips the banner of the interactive prompt.
    #[arg(short, long)]
    quiet: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate, or a path when `--file` is given.
    contents: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Rescan all operators before each contraction.
    Scan,
    /// Use a priority queue.
    Queue,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => Self::Scan,
            StrategyArg::Queue => Self::Queue,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ReplConfig { strategy: args.strategy.into(),
                              explain:  args.explain,
                              quiet:    args.quiet, };
    info!(?config, "starting");

    let outcome = match args.contents {
        None => run_interactive(&config),
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });
            run_script(&script, &config)
        },
        Some(expression) => print_evaluation(&expression, &config, &mut io::stdout().lock()),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_interactive(config: &ReplConfig) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl::run(stdin.lock(), &mut stdout, config)?;
    info!("interactive session finished");
    Ok(true)
}

fn run_script(script: &str, config: &ReplConfig) -> io::Result<bool> {
    let mut stdout = io::stdout().lock();
    let mut all_ok = true;
    for (number, line) in script.lines().enumerate() {
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        if !print_evaluation(expression, config, &mut stdout)? {
            warn!(line = number + 1, expression, "expression failed");
            all_ok = false;
        }
    }
    stdout.flush()?;

    Ok(all_ok)
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Args, StrategyArg};

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn file_flag_requires_a_path() {
        assert!(Args::try_parse_from(["graph-calculator", "--file"]).is_err());

        let args = Args::try_parse_from(["graph-calculator", "-f", "cases.txt", "-s", "queue"]).unwrap();
        assert!(args.file);
        assert_eq!(args.contents.as_deref(), Some("cases.txt"));
        assert_eq!(args.strategy, StrategyArg::Queue);
    }
}
