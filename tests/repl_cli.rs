use assert_cmd::prelude::*;
use assert_fs::{prelude::*, NamedTempFile};
use predicates::prelude::*;
use std::{
    io::Write,
    process::{Command, Stdio},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn test_cmd(temp_file: &NamedTempFile) -> Result<std::process::Child> {
    let cmd = Command::cargo_bin("inventory")?
        .arg("-f")
        .arg(temp_file.path())
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    Ok(cmd)
}

fn send(cmd: &mut std::process::Child, lines: &[&str]) -> Result<()> {
    let stdin = cmd.stdin.as_mut().ok_or("stdin not piped")?;
    for line in lines {
        writeln!(stdin, "{line}")?;
    }
    Ok(())
}

#[test]
fn adds_and_shows_product() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, &["2", "1", "Widget", "10", "2.50", "1", "5"])?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory file created"))
        .stdout(predicate::str::contains("Product added."))
        .stdout(predicate::str::contains(
            "ID:1 | Widget | Quantity:10 | Price:2.50",
        ));
    file.assert("1,Widget,10,2.50\n");

    file.close()?;
    Ok(())
}

#[test]
fn persists_data() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    let mut cmd = test_cmd(&file)?;

    for i in 0..3 {
        let id = i.to_string();
        let name = format!("{i}item");
        send(&mut cmd, &["2", id.as_str(), name.as_str(), "1", "1.5"])?;
    }
    send(&mut cmd, &["5"])?;
    cmd.wait_with_output()?.assert().success();

    let mut cmd = test_cmd(&file)?;
    send(&mut cmd, &["1", "5"])?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory loaded: 3 products."))
        .stdout(predicate::str::contains("0item"))
        .stdout(predicate::str::contains("1item"))
        .stdout(predicate::str::contains("2item"));

    file.close()?;
    Ok(())
}

#[test]
fn duplicate_ids_rejected() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    file.write_str("1,Widget,10,2.50\n")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, &["2", "1", "Impostor", "3", "1.0", "1", "5"])?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget"))
        .stdout(predicate::str::contains("Impostor").not())
        .stdout(predicate::str::contains(
            "error: a product with id 1 already exists",
        ));
    file.assert("1,Widget,10,2.50\n");

    file.close()?;
    Ok(())
}

#[test]
fn updates_quantity_only() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    file.write_str("1,Widget,10,2.50\n")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, &["3", "1", "5", "", "5"])?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated."));
    file.assert("1,Widget,5,2.50\n");

    file.close()?;
    Ok(())
}

#[test]
fn removes_last_product() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    file.write_str("1,Widget,10,2.50\n")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, &["4", "1", "1", "5"])?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Product removed."))
        .stdout(predicate::str::contains("Inventory is empty."));
    file.assert("");

    file.close()?;
    Ok(())
}

#[test]
fn skips_corrupt_lines() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    file.write_str("1,Widget,10,2.50\n2,Gadget,3\n")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, &["1", "5"])?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped corrupt line 2"))
        .stdout(predicate::str::contains("Inventory loaded: 1 products."))
        .stdout(predicate::str::contains("Gadget |").not());

    file.close()?;
    Ok(())
}

#[test]
fn invalid_input_never_reaches_store() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    file.write_str("1,Widget,10,2.50\n")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, &["2", "x", "4", "one", "3", "1", "lots", "", "5"])?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("error: invalid data."))
        .stdout(predicate::str::contains("error: invalid ID."));
    file.assert("1,Widget,10,2.50\n");

    file.close()?;
    Ok(())
}

#[test]
fn exits_at_end_of_input() -> Result<()> {
    let file = NamedTempFile::new("inventory.txt")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, &["1"])?;
    drop(cmd.stdin.take());

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory is empty."));

    file.close()?;
    Ok(())
}
