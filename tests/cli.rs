use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn formats_argument_text() {
    cargo_bin_cmd!("jtidy")
        .arg(r#"{"a":1,"b":[2,3]}"#)
        .assert()
        .success()
        .stdout("{\n    \"a\": 1,\n    \"b\": [\n        2,\n        3\n    ]\n}\n");
}

#[test]
fn reads_stdin_when_no_argument_is_given() {
    cargo_bin_cmd!("jtidy")
        .write_stdin(r#"{"k": "v"}"#)
        .assert()
        .success()
        .stdout("{\n    \"k\": \"v\"\n}\n");
}

#[test]
fn argument_takes_precedence_over_stdin() {
    cargo_bin_cmd!("jtidy")
        .arg(r#"{"a":1}"#)
        .write_stdin(r#"{"ignored":true}"#)
        .assert()
        .success()
        .stdout("{\n    \"a\": 1\n}\n");
}

#[test]
fn empty_stdin_prints_a_single_newline() {
    cargo_bin_cmd!("jtidy")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn stray_closer_is_rendered_with_clamped_depth() {
    cargo_bin_cmd!("jtidy")
        .arg("}")
        .assert()
        .success()
        .stdout("\n}\n");
}

#[test]
fn malformed_input_is_rendered_best_effort() {
    cargo_bin_cmd!("jtidy")
        .arg(r#"{"a":1"#)
        .assert()
        .success()
        .stdout(contains("\"a\": 1"));
}

#[test]
fn non_utf8_stdin_passes_through() {
    cargo_bin_cmd!("jtidy")
        .write_stdin(&b"[\"\xFF\"]"[..])
        .assert()
        .success()
        .stdout(&b"[\n    \"\xFF\"\n]\n"[..]);
}
