use std::process::{Command, Output};

fn rpncalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rpncalc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rpncalc")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn prints_one_line() {
    let cases = [
        ("1,2+", "3\n"),
        ("2,3,4+x", "14\n"),
        ("2,3,4+x2/", "7.0\n"),
        ("2,3,4+x2/1-", "6.0\n"),
    ];
    for (expr, expected) in cases {
        let out = rpncalc(&[expr]);
        assert!(out.status.success(), "{}: {}", expr, stderr(&out));
        assert_eq!(stdout(&out), expected);
        assert_eq!(stderr(&out), "");
    }
}

#[test]
fn joins_arguments() {
    let out = rpncalc(&["2", "3,4", "+x"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "14\n");
}

#[test]
fn malformed_fails_without_output() {
    let out = rpncalc(&["+"]);
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("failed to evaluate '+'"));
    assert!(stderr(&out).contains("malformed expression"));
    assert_eq!(stderr(&out).matches("needs 2 operands").count(), 1);
}

#[test]
fn integers_are_unbounded() {
    let expr = format!("9{}", "9x".repeat(19));
    let out = rpncalc(&[expr.as_str()]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "12157665459056928801\n");
}

#[test]
fn unknown_token_fails_without_output() {
    let out = rpncalc(&["2,y+"]);
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("unknown token 'y' at position 2"));
}

#[test]
fn division_by_zero_fails() {
    let out = rpncalc(&["10/"]);
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("division by zero"));
}

#[test]
fn missing_expression_is_usage_error() {
    let out = rpncalc(&[]);
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn trace_goes_to_stderr() {
    let out = rpncalc(&["--trace", "1,2+"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "3\n");
    let trace = stderr(&out);
    assert_eq!(trace.lines().count(), 3);
    assert!(trace.lines().last().unwrap().ends_with("+  [3]"));
}

#[test]
fn verbose_logs_to_stderr() {
    let out = rpncalc(&["-v", "42/"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2.0\n");
    assert!(stderr(&out).contains("evaluated"));
}
