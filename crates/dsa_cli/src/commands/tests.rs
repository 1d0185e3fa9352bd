use super::*;
use dsa_recursion::RecursionError;
use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> Result<String, CommandError> {
    let invocation = Invocation::parse(args.iter().map(|s| (*s).to_string()));
    Command::from_invocation(&invocation)?.run()
}

#[test]
fn fib_prints_the_term() {
    assert_eq!(run(&["fib", "6"]), Ok("8".to_string()));
    assert_eq!(run(&["fibonacci", "0"]), Ok("0".to_string()));
}

#[test]
fn fib_rejects_negative_index() {
    let err = run(&["fib", "-2"]).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Recursion(RecursionError::InvalidArgument { value: -2, .. })
    ));
    assert!(!err.wants_usage());
}

#[test]
fn fib_rejects_overflowing_index() {
    assert!(matches!(
        run(&["fib", "500"]),
        Err(CommandError::Recursion(RecursionError::Overflow { index: 500, .. }))
    ));
}

#[test]
fn fib_rejects_non_numbers() {
    let err = run(&["fib", "six"]).unwrap_err();
    assert!(matches!(err, CommandError::InvalidNumber { ref input, .. } if input == "six"));
}

#[test]
fn fib_requires_an_index() {
    let err = run(&["fib"]).unwrap_err();
    assert!(err.wants_usage());
    assert_eq!(
        err.to_string(),
        "missing argument: `fib` expects an index <n>"
    );
}

#[test]
fn palindrome_prints_bool() {
    assert_eq!(run(&["palindrome", "1221"]), Ok("true".to_string()));
    assert_eq!(run(&["palindrome", "1234"]), Ok("false".to_string()));
    assert_eq!(run(&["palindrome", ""]), Ok("true".to_string()));
}

#[test]
fn palindrome_requires_text() {
    assert!(matches!(
        run(&["palindrome"]),
        Err(CommandError::MissingArgument { command: "palindrome", .. })
    ));
}

#[test]
fn reverse_joins_items_backwards() {
    assert_eq!(run(&["reverse", "1", "2", "3", "4"]), Ok("4 3 2 1".to_string()));
    assert_eq!(run(&["reverse"]), Ok(String::new()));
}

#[test]
fn no_command_means_help() {
    assert_eq!(run(&[]), Ok(usage()));
    assert_eq!(run(&["--help"]), Ok(usage()));
}

#[test]
fn version_names_the_binary() {
    let out = run(&["version"]).unwrap();
    assert!(out.starts_with("dsa "));
}

#[test]
fn unknown_command_is_reported() {
    let err = run(&["sort", "3", "1"]).unwrap_err();
    assert_eq!(err, CommandError::UnknownCommand("sort".to_string()));
    assert!(err.wants_usage());
}
