use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::calculator::evaluator::{GraphCalculator, Strategy};

/// Words that end the interactive loop, compared case-insensitively.
pub const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "q"];

/// Printed before every line read.
pub const PROMPT: &str = "Input your expression: ";

/// Settings shared by the interactive loop and the one-shot modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Edge selection strategy passed to every calculator.
    pub strategy: Strategy,
    /// Print every contraction step before the result.
    pub explain:  bool,
    /// Suppress the banner.
    pub quiet:    bool,
}

/// Returns `true` if `line` asks the loop to terminate.
///
/// # Example
/// ```
/// use graph_calculator::repl::is_exit_command;
///
/// assert!(is_exit_command("  QUIT "));
/// assert!(!is_exit_command("1 + 1"));
/// ```
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    let command = line.trim();
    EXIT_COMMANDS.iter().any(|exit| command.eq_ignore_ascii_case(exit))
}

/// Evaluates one expression and writes the outcome to `output`.
///
/// On success the integer result is written on its own line, preceded by one
/// line per contraction when `config.explain` is set. On failure
/// `error: <message>` is written instead.
///
/// # Returns
/// `Ok(true)` if the expression evaluated, `Ok(false)` if it failed.
///
/// # Errors
/// Only I/O errors from `output` are returned.
pub fn print_evaluation<W: Write>(expression: &str,
                                  config: &ReplConfig,
                                  output: &mut W)
                                  -> io::Result<bool> {
    let calculator = match GraphCalculator::with_strategy(expression, config.strategy) {
        Ok(calculator) => calculator,
        Err(e) => {
            writeln!(output, "error: {e}")?;
            return Ok(false);
        },
    };

    let result = if config.explain {
        calculator.steps().map(|steps| {
                              let total = steps.last()
                                               .map_or_else(|| calculator.graph().initial_value(),
                                                            |step| step.result);
                              (steps, total)
                          })
    } else {
        calculator.calculate().map(|total| (Vec::new(), total))
    };

    match result {
        Ok((steps, total)) => {
            for step in steps {
                writeln!(output, "  {step}")?;
            }
            writeln!(output, "{total}")?;
            Ok(true)
        },
        Err(e) => {
            debug!(position = e.position(),
                   strategy = ?calculator.strategy(),
                   "contraction failed");
            writeln!(output, "error: {e}")?;
            Ok(false)
        },
    }
}

/// Runs the interactive loop.
///
/// Reads `input` line by line, prompting on `output` before each read. Exit
/// commands and end of input terminate the loop, blank lines are skipped and
/// every other line is evaluated with [`print_evaluation`]. Bytes that are not
/// valid UTF-8 are replaced, so such a line fails as an unexpected token
/// instead of ending the session.
///
/// # Errors
/// Returns any I/O error raised while reading or writing.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, config: &ReplConfig) -> io::Result<()> {
    if !config.quiet {
        writeln!(output, "Graph Calculator (space-separated). Examples: 2 + 2 * 2")?;
        writeln!(output, "Type 'exit' to quit.\n")?;
    }

    let mut buffer = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            debug!("end of input");
            break;
        }
        let line = String::from_utf8_lossy(&buffer);

        if is_exit_command(&line) {
            info!(command = line.trim(), "exit requested");
            break;
        }

        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        print_evaluation(expression, config, output)?;
    }

    Ok(())
}
