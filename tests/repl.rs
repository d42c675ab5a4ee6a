use std::io::Cursor;

use graph_calculator::{
    Strategy,
    repl::{PROMPT, ReplConfig, is_exit_command, print_evaluation, run},
};

fn session(input: &str, config: &ReplConfig) -> String {
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

fn quiet() -> ReplConfig {
    ReplConfig { quiet: true,
                 ..ReplConfig::default() }
}

#[test]
fn prints_banner_results_and_errors() {
    let output = session("2 + 2 * 2\n2 + x\n5 / 0\n", &ReplConfig::default());

    assert!(output.starts_with("Graph Calculator (space-separated). Examples: 2 + 2 * 2\n"));
    assert!(output.contains("Type 'exit' to quit.\n"));
    assert!(output.contains(&format!("{PROMPT}6\n")));
    assert!(output.contains("error: Unexpected token 'x' at position 2.\n"));
    assert!(output.contains("error: Division by zero.\n"));
}

#[test]
fn exit_commands_stop_the_loop() {
    for command in ["exit", "QUIT", "  q  ", "Exit"] {
        let output = session(&format!("1 + 1\n{command}\n3 * 3\n"), &quiet());
        assert_eq!(output, format!("{PROMPT}2\n{PROMPT}"), "command '{command}'");
    }
}

#[test]
fn blank_lines_prompt_again() {
    let output = session("\n   \n7 - 10\n", &quiet());
    assert_eq!(output, format!("{PROMPT}{PROMPT}{PROMPT}-3\n{PROMPT}"));
}

#[test]
fn end_of_input_stops_the_loop() {
    assert_eq!(session("", &quiet()), PROMPT);
    assert_eq!(session("4 / 3", &quiet()), format!("{PROMPT}1\n{PROMPT}"));
}

#[test]
fn errors_do_not_end_the_session() {
    let output = session("1 +\n\n2 2\n9 - 1\n", &quiet());
    let lines: Vec<_> = output.split(PROMPT).filter(|part| !part.is_empty()).collect();

    assert_eq!(lines,
               vec!["error: Unexpected end of input: expected a number at position 2.\n",
                    "error: Malformed expression: expected an operator at position 1 but found '2'.\n",
                    "8\n"]);
}

#[test]
fn explain_prints_each_contraction() {
    let config = ReplConfig { explain: true,
                              strategy: Strategy::Queue,
                              ..ReplConfig::default() };
    let mut output = Vec::new();

    assert!(print_evaluation("2 * 3 + 4 * 5", &config, &mut output).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(),
               "  #0: 2 * 3 = 6\n  #2: 4 * 5 = 20\n  #1: 6 + 20 = 26\n26\n");
}

#[test]
fn explain_single_literal() {
    let config = ReplConfig { explain: true,
                              ..ReplConfig::default() };
    let mut output = Vec::new();

    assert!(print_evaluation("-12", &config, &mut output).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(), "-12\n");
}

#[test]
fn failed_evaluation_is_reported() {
    let mut output = Vec::new();

    assert!(!print_evaluation("", &ReplConfig::default(), &mut output).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(), "error: Empty expression.\n");
}

#[test]
fn exit_command_detection() {
    assert!(is_exit_command("exit"));
    assert!(is_exit_command("Q\n"));
    assert!(!is_exit_command("exit now"));
    assert!(!is_exit_command(""));
}

#[test]
fn invalid_utf8_line_is_reported_and_the_session_continues() {
    let mut output = Vec::new();
    run(Cursor::new(&b"1 + 1\n\xff\xfe\n2 * 3\n"[..]), &mut output, &quiet()).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(),
               format!("{PROMPT}2\n{PROMPT}error: Unexpected token '\u{FFFD}\u{FFFD}' at position 0.\n{PROMPT}6\n{PROMPT}"));
}
