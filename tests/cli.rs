//! Command-line behaviour of the `paelles` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn paelles() -> Command {
    Command::cargo_bin("paelles").unwrap()
}

#[test]
fn print_uses_defaults() {
    paelles()
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Paella de marisc: 6 persones, paella de 70 cm\n",
        ))
        .stdout(predicate::str::contains("600 grams"))
        .stdout(predicate::str::contains("2.70 litres"))
        .stdout(predicate::str::contains("Al gust"));
}

#[test]
fn print_scales_to_guests_and_pan() {
    paelles()
        .args(["--print", "--persones", "20", "--mida-paella", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 persones, paella de 60 cm"))
        .stdout(predicate::str::contains("2.00 kg"))
        .stdout(predicate::str::contains("7.00 litres"))
        .stdout(predicate::str::contains("40 unitats"));
}

#[test]
fn unsupported_pan_size_is_rejected() {
    paelles()
        .args(["--print", "-m", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported pan size: 45"));
}

#[test]
fn link_initializes_inputs() {
    paelles()
        .args([
            "--print",
            "--link",
            "https://paelles.vercel.app/?persones=12&mida_paella=50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("12 persones, paella de 50 cm"))
        .stdout(predicate::str::contains("3.60 litres"));
}

#[test]
fn explicit_flags_override_link() {
    paelles()
        .args([
            "--print",
            "--link",
            "https://paelles.vercel.app/?persones=12&mida_paella=50",
            "-p",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 persones, paella de 50 cm"));
}

#[test]
fn malformed_link_fails() {
    paelles()
        .args(["--print", "--link", "no és un enllaç"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid share link"));
}

#[test]
fn share_text_prints_summary_and_link() {
    paelles()
        .args(["--share-text", "-p", "8", "-m", "70"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("🥘 Paella de marisc:"))
        .stdout(predicate::str::contains("Persones: 8"))
        .stdout(predicate::str::contains(
            "Generat amb https://paelles.vercel.app/?persones=8&mida_paella=70",
        ));
}

#[test]
fn share_text_honours_base_url() {
    paelles()
        .args(["--share-text", "--base-url", "https://example.org/"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generat amb https://example.org/?persones=6&mida_paella=70",
        ));
}

#[test]
fn share_without_clipboard_falls_back_to_stdout() {
    let output = paelles()
        .args(["--share", "-p", "4", "-m", "60"])
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    match stderr.trim() {
        "Error copiant al porta-retalls." => {
            assert!(stdout.starts_with("🥘 Paella de marisc:"));
            assert!(stdout.contains("Persones: 4\nMida paella: 60 cm:"));
            assert!(stdout.contains(
                "Generat amb https://paelles.vercel.app/?persones=4&mida_paella=60"
            ));
        },
        "Copiat al porta-retalls!" => assert!(stdout.is_empty()),
        other => panic!("unexpected notification: {other:?}"),
    }
}

#[test]
fn print_and_share_conflict() {
    paelles().args(["--print", "--share"]).assert().failure();
}

#[test]
fn log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("paelles.log");

    paelles()
        .arg("--print")
        .arg("--log")
        .arg(&log_path)
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Starting Paelles"));
    assert!(log.contains("Calculating recipe"));
}
