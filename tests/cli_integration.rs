//! Integration tests for the encoder CLI

#[cfg(feature = "cli")]
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    const LONG_ATOM_JSON: &str = r#"{"type": "long", "value": 1}"#;

    #[test]
    fn test_cli_hex_output_works() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        cmd.arg(LONG_ATOM_JSON)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "0101000011000000f90100000000000000",
            ));
    }

    #[test]
    fn test_cli_reads_stdin() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        cmd.write_stdin(LONG_ATOM_JSON)
            .assert()
            .success()
            .stdout(predicate::str::contains("f90100000000000000"));
    }

    #[test]
    fn test_cli_base64_output_works() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        let output = cmd
            .args(["-o", "base64", r#"{"type": "null"}"#])
            .output()
            .expect("Failed to execute CLI command");

        assert!(output.status.success(), "CLI command should succeed");

        let stdout = String::from_utf8(output.stdout).expect("Output should be valid UTF-8");
        use data_encoding::BASE64;
        let decoded = BASE64.decode(stdout.trim().as_bytes()).unwrap();
        assert_eq!(decoded.len(), 10);
        assert_eq!(&decoded[8..], &[0x65, 0x00]);
    }

    #[test]
    fn test_cli_message_type_flag() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        let output = cmd
            .args(["--msg-type", "async", LONG_ATOM_JSON])
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("0100"));
    }

    #[test]
    fn test_cli_protocol_version_gate() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        cmd.args([
            "-p",
            "0",
            r#"{"type": "timestamp", "value": 0}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("protocol version violation"));
    }

    #[test]
    fn test_cli_single_char_strings_flag() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        let collapsed = cmd
            .arg(r#"{"type": "string", "value": "a"}"#)
            .output()
            .unwrap();
        assert!(String::from_utf8(collapsed.stdout).unwrap().contains("f661"));

        let mut cmd = Command::cargo_bin("qwire").unwrap();
        let preserved = cmd
            .args(["--single-char-strings", r#"{"type": "string", "value": "a"}"#])
            .output()
            .unwrap();
        assert!(
            String::from_utf8(preserved.stdout)
                .unwrap()
                .contains("0a000100000061")
        );
    }

    #[test]
    fn test_cli_handles_invalid_json() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        cmd.arg("not json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error parsing value"));
    }

    #[test]
    fn test_cli_help_contains_expected_text() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        cmd.arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Encode tagged-JSON values into kdb+ IPC messages",
            ))
            .stdout(predicate::str::contains("Output format"));
    }

    #[test]
    fn test_cli_version_works() {
        let mut cmd = Command::cargo_bin("qwire").unwrap();
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("qwire"))
            .stderr("");
    }
}
