mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_amount_skips_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amounts.csv");
    common::write_csv(
        &path,
        &["first_name", "amount"],
        &[&["Ann", "1.0"], &["Bob", "not_a_number"], &["Cat", "2.0"]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("stpp-fragments"));
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading record 2"))
        .stdout(predicate::str::contains("<first>Ann</first>"))
        .stdout(predicate::str::contains("<first>Bob</first>").not())
        .stdout(predicate::str::contains(
            "<billing><name><first>Cat</first></name><amount currencycode=\"GBP\">200</amount></billing>",
        ));
}

#[test]
fn test_malformed_json_record_skips_only_that_record() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[{{"first_name": "Ann", "amount": 1.5}}, {{"first_name": ["Bob"]}}, {{"first_name": "Cat"}}]"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("stpp-fragments"));
    cmd.arg(file.path()).arg("--format").arg("json");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading record 2"))
        .stdout(predicate::str::contains(
            "<billing><name><first>Ann</first></name><amount currencycode=\"GBP\">150</amount></billing>",
        ))
        .stdout(predicate::str::contains("Bob").not())
        .stdout(predicate::str::contains(
            "<billing><name><first>Cat</first></name></billing>",
        ));
}

#[test]
fn test_json_out_of_range_expiry_skips_record() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[{{"first_name": "Ann", "expiry_date": 99999999999999999}}, {{"first_name": "Cat"}}]"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("stpp-fragments"));
    cmd.arg(file.path()).arg("--format").arg("json");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error building record 1"))
        .stdout(predicate::str::contains("Ann").not())
        .stdout(predicate::str::contains("<first>Cat</first>"));
}

#[test]
fn test_unreadable_row_skips_record() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"first_name\nAnn\n\xff\xfe\nCat\n").unwrap();

    let mut cmd = Command::new(cargo_bin!("stpp-fragments"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading record 2"))
        .stdout(predicate::str::contains("<first>Ann</first>"))
        .stdout(predicate::str::contains("<first>Cat</first>"));
}

#[test]
fn test_empty_record_prints_empty_billing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    common::write_csv(&path, &["first_name", "town"], &[&["", ""]]).unwrap();

    let mut cmd = Command::new(cargo_bin!("stpp-fragments"));
    cmd.arg(&path).env("RUST_LOG", "warn");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<billing/>"))
        .stderr(predicate::str::contains("record has no billing fields"));
}

#[test]
fn test_out_of_range_expiry_skips_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expiry.csv");
    common::write_csv(
        &path,
        &["first_name", "expiry_date"],
        &[&["Ann", "99999999999999999"]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("stpp-fragments"));
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error building record 1"))
        .stdout(predicate::str::contains("Ann").not());
}
