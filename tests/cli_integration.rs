#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn solid_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("solid"));
    cmd.env("SOLID_HOME", home.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("SOLID_LOG");
    cmd
}

#[test]
fn journal_add_show_and_save() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["journal", "add", "Hello", "World!!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added: 1: Hello World!!"));

    solid_cmd(&home)
        .args(["journal", "add", "Hello Rust!!"])
        .assert()
        .success();

    solid_cmd(&home)
        .args(["journal", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World!!"))
        .stdout(predicate::str::contains("Hello Rust!!"));

    let target = home.path().join("sro.txt");
    solid_cmd(&home)
        .args(["journal", "save", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal saved to"));

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "1: Hello World!!\n2: Hello Rust!!"
    );
}

#[test]
fn journal_remove_keeps_numbering() {
    let home = TempDir::new().unwrap();

    for text in ["a", "b", "c"] {
        solid_cmd(&home)
            .args(["journal", "add", text])
            .assert()
            .success();
    }

    solid_cmd(&home)
        .args(["journal", "remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry removed (position 0): 1: a"));

    solid_cmd(&home)
        .args(["journal", "add", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4: d"));

    solid_cmd(&home).args(["journal", "save"]).assert().success();
    assert_eq!(
        fs::read_to_string(home.path().join("journal.txt")).unwrap(),
        "2: b\n3: c\n4: d"
    );
}

#[test]
fn journal_remove_out_of_range_fails() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["journal", "remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No journal entry at position 3"));
}

#[test]
fn configured_journal_file_is_used_by_save() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["config", "journal-file", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal-file set to notes.txt"));

    solid_cmd(&home)
        .args(["journal", "add", "remember"])
        .assert()
        .success();
    solid_cmd(&home).args(["journal", "save"]).assert().success();

    assert_eq!(
        fs::read_to_string(home.path().join("notes.txt")).unwrap(),
        "1: remember"
    );
}

#[test]
fn products_by_color() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["products", "--color", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apple"))
        .stdout(predicate::str::contains("tree"))
        .stdout(predicate::str::contains("house").not());
}

#[test]
fn products_by_combined_criteria() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["products", "--where", "color=blue & size=large"])
        .assert()
        .success()
        .stdout(predicate::str::contains("house"))
        .stdout(predicate::str::contains("tree").not());
}

#[test]
fn products_without_matches() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["products", "-c", "red", "-s", "small"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products match color=red & size=small"));
}

#[test]
fn products_from_catalog_file() {
    let home = TempDir::new().unwrap();
    let catalog = home.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"[{"name": "kite", "color": "red", "size": "medium"},
            {"name": "boat", "color": "blue", "size": "large"}]"#,
    )
    .unwrap();

    solid_cmd(&home)
        .args(["products", "--size", "medium", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("kite"))
        .stdout(predicate::str::contains("boat").not());
}

#[test]
fn unknown_attribute_fails() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["products", "--where", "weight=heavy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown attribute: 'weight'"))
        .stderr(predicate::str::contains("expected one of: color, size"));
}

#[test]
fn shapes_reports_square_break() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["shapes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected an area of 20, got 20"))
        .stdout(predicate::str::contains("Expected an area of 50, got 100"))
        .stdout(predicate::str::contains("cannot stand in for a rectangle"));
}

#[test]
fn shapes_accept_large_dimensions() {
    let home = TempDir::new().unwrap();

    solid_cmd(&home)
        .args(["shapes", "--width", "500000000", "--side", "70000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Expected an area of 5000000000, got 5000000000",
        ));
}
