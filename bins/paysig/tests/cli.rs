//! End-to-end tests for the paysig binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const KEY: &str = "44782DEF547AAA06C910C43932B1EB0C71FC68D9D0C057550C48EC2ACF6BA056";
const SIGNATURE: &str = "XBZHqzdkxVLOTbbI7KBI8lrp9rJJ90NCiNk+TiFtALA=";
const DATA: &str = "authResult:merchantReference:paymentMethod:pspReference:shopperLocale:\
                    skinCode:AUTHORISED:ABC123FED098:mc:1234567890:en_GB:asdfghj";

/// A command isolated from the caller's config files and environment.
fn paysig(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paysig").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("PAYSIG_HMAC_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn example_fields(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "--auth-result",
        "AUTHORISED",
        "--psp-reference",
        "1234567890",
        "--merchant-reference",
        "ABC123FED098",
        "--skin-code",
        "asdfghj",
        "--shopper-locale",
        "en_GB",
        "--payment-method",
        "mc",
    ])
}

#[test]
fn sign_with_secret_flag() {
    let home = TempDir::new().unwrap();
    let mut cmd = paysig(&home);
    cmd.args(["sign", "--secret", KEY]);
    example_fields(&mut cmd)
        .assert()
        .success()
        .stdout(format!("{SIGNATURE}\n"));
}

#[test]
fn sign_with_secret_from_env() {
    let home = TempDir::new().unwrap();
    let mut cmd = paysig(&home);
    cmd.env("PAYSIG_HMAC_KEY", KEY).args(["sign", "--url-encode"]);
    example_fields(&mut cmd)
        .assert()
        .success()
        .stdout("XBZHqzdkxVLOTbbI7KBI8lrp9rJJ90NCiNk%2BTiFtALA%3D\n");
}

#[test]
fn sign_with_secret_from_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("shop.key"), format!("{KEY}\n")).unwrap();
    fs::write(
        home.path().join(".paysig.toml"),
        "[signing]\nsecret_env = \"SHOP_KEY\"\nsecret_file = \"shop.key\"\n",
    )
    .unwrap();

    let mut cmd = paysig(&home);
    cmd.args(["sign", "--show-data"]);
    example_fields(&mut cmd)
        .assert()
        .success()
        .stdout(format!("{DATA}\n{SIGNATURE}\n"));
}

#[test]
fn sign_json_output() {
    let home = TempDir::new().unwrap();
    let mut cmd = paysig(&home);
    cmd.args(["--format", "json", "sign", "--secret", KEY, "--url-encode"]);
    let output = example_fields(&mut cmd).assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["signature"], SIGNATURE);
    assert_eq!(value["url_encoded"], "XBZHqzdkxVLOTbbI7KBI8lrp9rJJ90NCiNk%2BTiFtALA%3D");
    assert!(value.get("data").is_none());
}

#[test]
fn sign_without_secret_fails() {
    let home = TempDir::new().unwrap();
    let mut cmd = paysig(&home);
    cmd.arg("sign");
    example_fields(&mut cmd)
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("E4002"));
}

#[test]
fn sign_with_malformed_secret_fails() {
    let home = TempDir::new().unwrap();
    for secret in ["a", "zz"] {
        let mut cmd = paysig(&home);
        cmd.args(["sign", "--secret", secret]);
        example_fields(&mut cmd)
            .assert()
            .code(3)
            .stdout("")
            .stderr(predicate::str::contains("E4001"));
    }
}

#[test]
fn canonical_prints_data_string() {
    let home = TempDir::new().unwrap();
    let mut cmd = paysig(&home);
    cmd.arg("canonical");
    example_fields(&mut cmd)
        .assert()
        .success()
        .stdout(format!("{DATA}\n"));
}

#[test]
fn canonical_escapes_and_excludes() {
    let home = TempDir::new().unwrap();
    paysig(&home)
        .args([
            "canonical",
            "--field",
            "merchantReference=ORDER:42",
            "--field",
            "skinCode=back\\slash",
            "--field",
            "merchantSig=zzz",
            "--field",
            "ignore.me=x",
        ])
        .assert()
        .success()
        .stdout("merchantReference:skinCode:ORDER\\:42:back\\\\slash\n");
}

#[test]
fn canonical_of_nothing_is_empty() {
    let home = TempDir::new().unwrap();
    paysig(&home)
        .arg("canonical")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn verify_received_notification() {
    let home = TempDir::new().unwrap();
    let notification = home.path().join("notification.json");
    fs::write(
        &notification,
        format!(
            r#"{{
                "authResult": "AUTHORISED",
                "pspReference": "1234567890",
                "merchantReference": "ABC123FED098",
                "skinCode": "asdfghj",
                "shopperLocale": "en_GB",
                "paymentMethod": "mc",
                "merchantSig": "{SIGNATURE}"
            }}"#
        ),
    )
    .unwrap();

    paysig(&home)
        .args(["verify", "--secret", KEY, "--signature", SIGNATURE, "--fields-file"])
        .arg(&notification)
        .assert()
        .success()
        .stderr(predicate::str::contains("Signature valid"));
}

#[test]
fn verify_mismatch_exits_non_zero() {
    let home = TempDir::new().unwrap();
    paysig(&home)
        .args(["verify", "--secret", KEY, "--signature", SIGNATURE])
        .args(["--auth-result", "REFUSED", "--psp-reference", "1234567890"])
        .args(["--merchant-reference", "ABC123FED098", "--skin-code", "asdfghj"])
        .args(["--shopper-locale", "en_GB", "--payment-method", "mc"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Signature mismatch"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    paysig(&home)
        .args(["--config", "missing.toml", "canonical"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3001"));
}

#[test]
fn invalid_field_pair_fails() {
    let home = TempDir::new().unwrap();
    paysig(&home)
        .args(["canonical", "--field", "novalue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NAME=VALUE"));
}
