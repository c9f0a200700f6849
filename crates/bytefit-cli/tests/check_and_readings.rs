use std::process::Command;

fn run(args: &[&str]) -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_bytefit-cli"))
        .args(args)
        .output()
        .expect("spawn bytefit-cli");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn readings_prints_the_window_value() {
    let stdout = run(&["readings", "--hex", "aabbd8020011", "--offset", "2"]);
    assert!(stdout.contains("reading=728"), "stdout:\n{}", stdout);
}

#[test]
fn readings_reports_infeasible_windows() {
    let stdout = run(&["readings", "--hex", "aabbd8020011", "--offset", "5"]);
    assert!(stdout.contains("infeasible"), "stdout:\n{}", stdout);
}

#[test]
fn check_accepts_the_planted_law() {
    let stdout = run(&[
        "check",
        "--sample",
        "aabbd8020011:72.8:old",
        "--sample",
        "aabb22020011:54.6:new",
        "--offset",
        "2",
        "--factor",
        "0.1",
    ]);
    assert!(stdout.contains("check ok:"), "stdout:\n{}", stdout);
}

#[test]
fn check_flags_a_wrong_factor() {
    let stdout = run(&[
        "check",
        "--sample",
        "aabbd8020011:72.8:old",
        "--offset",
        "2",
        "--factor",
        "0.2",
    ]);
    assert!(stdout.contains("check failed:"), "stdout:\n{}", stdout);
}

#[test]
fn check_verifies_an_affine_law() {
    // Readings 10, 20, 15 at offset 0 (u16 le) against 2x + 5.
    let stdout = run(&[
        "check",
        "--sample",
        "0a00:25.0:a",
        "--sample",
        "1400:45.0:b",
        "--sample",
        "0f00:35.0:c",
        "--offset",
        "0",
        "--slope",
        "2.0",
        "--intercept",
        "5.0",
        "--tol",
        "0.2",
    ]);
    assert!(stdout.contains("check ok:"), "stdout:\n{}", stdout);
}
