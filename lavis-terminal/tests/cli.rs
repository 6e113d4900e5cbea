use std::process::{Command, Output};

fn lavis(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lavis"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lavis")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn vectors_print_reports_and_renders() {
    let output = lavis(&["vectors", "--print"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("A·v = [  3.000000,   0.000000]"));
    assert!(out.contains("Linear Transformation"));
    assert!(!out.contains("image of triangle"));
}

#[test]
fn vectors_print_is_deterministic() {
    let a = lavis(&["vectors", "--print", "--show-image"]);
    let b = lavis(&["vectors", "--print", "--show-image"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
    assert!(stdout(&a).contains("image of triangle:"));
}

#[test]
fn custom_vector_and_matrix() {
    let output = lavis(&[
        "vectors",
        "--matrix",
        "[[0, -1], [1, 0]]",
        "--vector",
        "-2, 1",
        "--print",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("A·v = [ -1.000000,  -2.000000]"));
}

#[test]
fn wrong_matrix_shape_exits_with_context() {
    let output = lavis(&["vectors", "--matrix", "1 2 3", "--print"]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("invalid --matrix"), "stderr: {err}");
    assert!(err.contains("expected a 2x2 value, got 1x3"), "stderr: {err}");
    assert!(stdout(&output).is_empty());
}

#[test]
fn malformed_vector_exits_with_context() {
    let output = lavis(&["vectors", "--vector", "1, x", "--print"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid --vector"));
}

#[test]
fn non_finite_angles_are_rejected() {
    for args in [
        ["isometric", "--theta", "inf", "--print"],
        ["isometric", "--theta", "nan", "--print"],
        ["isometric", "--elev", "inf", "--print"],
        ["isometric", "--azim", "NaN", "--print"],
    ] {
        let output = lavis(&args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stderr(&output).contains("not a finite number"), "args: {args:?}");
        assert!(!stdout(&output).contains("NaN"), "args: {args:?}");
    }
}

#[test]
fn isometric_print_defaults() {
    let output = lavis(&["isometric", "--print"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("theta = 0.463648\n"));
    assert!(out.contains("projected vertices (elev 20, azim -120):"));
    assert!(!out.contains("NaN"));
}

#[test]
fn isometric_flags_reach_the_report() {
    let output = lavis(&[
        "isometric",
        "--theta",
        "0",
        "--translate",
        "1, 2, 3",
        "--elev",
        "0",
        "--azim",
        "-90",
        "--print",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("theta = 0.000000\n"));
    // (0,0,0) and (2,0,0) shifted by the translation
    assert!(out.contains("  0: [  1.000000,   2.000000,   3.000000]"));
    assert!(out.contains("  1: [  3.000000,   2.000000,   3.000000]"));
    assert!(out.contains("projected vertices (elev 0, azim -90):"));
}

#[test]
fn bad_translation_exits_with_context() {
    let output = lavis(&["isometric", "--translate", "1, 2", "--print"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid --translate"));
}
