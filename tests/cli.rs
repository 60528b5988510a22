use assert_cmd::Command;
use std::io::Write;

fn clex() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

#[test]
fn test_stdin_tokens_and_table() {
    let output = clex()
        .arg("--no-color")
        .write_stdin("int a = 10;\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(
        stdout,
        "int - keyword\n\
         a - identifier\n\
         = - operator\n\
         10 - integer constant\n\
         ; - special character\n\
         \n\
         Content of Symbol Table\n\
         Name\tType\tNo of bytes\tAddress\tValue\n\
         a\tint\t4\t1000\t0\n"
    );
}

#[test]
fn test_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "// header\nx = y + x;").unwrap();

    let output = clex()
        .arg(file.path())
        .args(["--no-color", "--base-address", "0"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("x\tint\t4\t0\t0"));
    assert!(stdout.contains("y\tint\t4\t4\t0"));
    assert!(!stdout.contains("header"));
}

#[test]
fn test_tokens_only() {
    let output = clex()
        .args(["--no-color", "--tokens-only"])
        .write_stdin("a;")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout, "a - identifier\n; - special character\n");
}

#[test]
fn test_errors_reported_and_scan_continues() {
    let output = clex()
        .arg("--no-color")
        .write_stdin("a $ b \"open")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("b - identifier"));
    assert!(stderr.contains("unrecognized character '$' at byte 2"));
    assert!(stderr.contains("unterminated string literal"));
}

#[test]
fn test_strict_stops_early() {
    let output = clex()
        .args(["--no-color", "--strict"])
        .write_stdin("a /* open")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error 1:2"));
    assert!(stderr.contains("unterminated block comment"));
}

#[test]
fn test_missing_file() {
    clex()
        .arg("/nonexistent/input.c")
        .assert()
        .failure();
}

#[test]
fn test_base_address_out_of_range() {
    let output = clex()
        .args(["--base-address", "18446744073709551615"])
        .write_stdin("x y")
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("--base-address"));
}

#[test]
fn test_base_address_upper_bound() {
    let output = clex()
        .args(["--no-color", "--base-address", "4294967295"])
        .write_stdin("x y")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("x\tint\t4\t4294967295\t0"));
    assert!(stdout.contains("y\tint\t4\t4294967299\t0"));
}
