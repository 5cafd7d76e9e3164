use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_slackify"))
}

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "slackify_cli_{}_{}_{}.html",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn converts_file_argument() {
    let input = temp_file("bold", b"<b>Hello</b> <i>Slack</i>");
    let output = Command::new(bin_path())
        .arg(&input)
        .output()
        .expect("run");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "*Hello* _Slack_\n");
}

#[test]
fn converts_stdin_when_no_argument_is_given() {
    let mut child = Command::new(bin_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"<ul><li>a</li><li>b</li></ul>")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\u{2022} a\n\u{2022} b\n");
}

#[test]
fn missing_file_reports_error_and_exit_code() {
    let output = Command::new(bin_path())
        .arg("does-not-exist.html")
        .output()
        .expect("run");

    assert!(!output.status.success(), "expected error exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open"), "stderr was: {stderr}");
}

#[test]
fn invalid_utf8_input_reports_error_and_exit_code() {
    let input = temp_file("bad_bytes", &[0xff, 0xfe, b'a']);
    let output = Command::new(bin_path())
        .arg(&input)
        .output()
        .expect("run");

    assert!(!output.status.success(), "expected error exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid UTF-8"), "stderr was: {stderr}");
}
