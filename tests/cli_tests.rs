//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;

fn calc() -> Command {
    let mut cmd = Command::cargo_bin("subnet-calculator").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("SUBNET_CALC_STRICT")
        .env_remove("SUBNET_CALC_FORMAT")
        .env_remove("SUBNET_CALC_LOG_CONFIG");
    cmd
}

#[test]
fn test_version_flag() {
    calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("subnet-calculator"));
}

#[test]
fn test_help_flag() {
    calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculate IPv4 subnet mask"));
}

#[test]
fn test_report_output() {
    calc()
        .args(["192.168.1.0", "24"])
        .assert()
        .success()
        .stdout(
            "Subnet Calculator Results for 192.168.1.0/24:\n\
             Subnet Mask: 255.255.255.0\n\
             Wildcard Mask: 0.0.0.255\n\
             Total Hosts: 256\n\
             Usable Hosts: 254\n\
             Network Address: 192.168.1.0\n\
             Broadcast Address: 192.168.1.255\n\
             First Usable IP: 192.168.1.1\n\
             Last Usable IP: 192.168.1.254\n",
        );
}

#[test]
fn test_title_echoes_address_as_typed() {
    calc()
        .args(["010.000.001.000", "24"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Subnet Calculator Results for 010.000.001.000/24:\n",
        ))
        .stdout(predicate::str::contains("Network Address: 10.0.1.0\n"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    calc()
        .arg("192.168.1.0")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: subnet-calculator <network> <cidr>",
        ));
}

#[test]
fn test_extra_argument_is_usage_error() {
    calc()
        .args(["192.168.1.0", "24", "25"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Example: subnet-calculator 192.168.1.0 24"));
}

#[test]
fn test_non_integer_cidr_is_usage_error() {
    calc()
        .args(["192.168.1.0", "/24"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_prefix_default_exit_zero() {
    calc()
        .args(["192.168.1.0", "33"])
        .assert()
        .success()
        .stdout("Invalid CIDR. Must be between 0 and 32.\n");
}

#[test]
fn test_negative_prefix() {
    calc()
        .args(["192.168.1.0", "-1"])
        .assert()
        .success()
        .stdout("Invalid CIDR. Must be between 0 and 32.\n");
}

#[test]
fn test_invalid_address_messages() {
    calc()
        .args(["300.1.1.1", "24"])
        .assert()
        .success()
        .stdout("Invalid IP address.\n");
    calc()
        .args(["1.2.3", "24"])
        .assert()
        .success()
        .stdout("Invalid IP address.\n");
    calc()
        .args(["1.2.3.-4", "24"])
        .assert()
        .success()
        .stdout("Invalid IP address.\n");
    calc()
        .args(["a.b.c.d", "24"])
        .assert()
        .success()
        .stdout("Invalid IP address format.\n");
}

#[test]
fn test_strict_exit_codes() {
    calc()
        .args(["--strict", "192.168.1.0", "33"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid CIDR"));
    calc()
        .args(["--strict", "1.2.3", "24"])
        .assert()
        .code(3);
    calc()
        .env("SUBNET_CALC_STRICT", "1")
        .args(["a.b.c.d", "24"])
        .assert()
        .code(3);
}

#[test]
fn test_json_output() {
    let output = calc()
        .args(["--format", "json", "10.0.0.5", "8"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["network_address"], "10.0.0.0");
    assert_eq!(v["broadcast_address"], "10.255.255.255");
    assert_eq!(v["cidr"], "10.0.0.0/8");
}

#[test]
fn test_json_format_from_env() {
    calc()
        .env("SUBNET_CALC_FORMAT", "json")
        .args(["1.2.3", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error\": \"Invalid IP address.\""));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    calc()
        .args(["-v", "10.0.0.1", "32"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Subnet Calculator Results for 10.0.0.1/32:",
        ))
        .stderr(predicate::str::contains("run()"));
}
