use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn command_search_short_repeat() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let reference = temp.path().join("ref.fa");
    fs::write(&reference, ">r\nACGTACGTAC\n")?;

    let mut cmd = Command::cargo_bin("sear")?;
    cmd.arg("search")
        .arg(&reference)
        .arg("ACGT")
        .arg("-k")
        .arg("4")
        .arg("--threshold")
        .arg("20");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# hits:\t2"))
        .stdout(predicate::str::contains("0\t3\t20.00"))
        .stdout(predicate::str::contains("4\t7\t20.00"));

    Ok(())
}

#[test]
fn command_search_tie_break_is_stable() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let reference = temp.path().join("ref.fa");
    fs::write(&reference, ">r\nACGTACGTAC\n")?;

    let mut cmd = Command::cargo_bin("sear")?;
    let output = cmd
        .arg("search")
        .arg(&reference)
        .arg("ACGT")
        .arg("-k")
        .arg("4")
        .arg("--threshold")
        .arg("20")
        .output()?;

    // equal scores: the earlier span must come first
    let stdout = String::from_utf8(output.stdout)?;
    let rows: Vec<&str> = stdout.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(rows, vec!["0\t3\t20.00", "4\t7\t20.00"]);

    Ok(())
}

#[test]
fn command_search_exact_read() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("sear")?;
    let output = cmd
        .arg("search")
        .arg("tests/data/ref.fa")
        .arg("TAACGTGCAACTTGGCATCG")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# hits:\t10"));
    assert!(stdout.contains("37\t56\t100.00"));

    Ok(())
}

#[test]
fn command_search_weighted() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("sear")?;
    let output = cmd
        .arg("search")
        .arg("tests/data/ref.fa")
        .arg("TAACGTGCAACTTGGCATCG")
        .arg("--prob")
        .arg("tests/data/ref.prob")
        .output()?;

    // every matching position scores 0.9*5 + 0.1*-4 = 4.1
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("37\t56\t82.00"));

    Ok(())
}

#[test]
fn command_search_top_limits_output() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let reference = temp.path().join("ref.fa");
    fs::write(&reference, ">r\nACGTACGTAC\n")?;

    let mut cmd = Command::cargo_bin("sear")?;
    let output = cmd
        .arg("search")
        .arg(&reference)
        .arg("ACGT")
        .arg("-k")
        .arg("4")
        .arg("--threshold")
        .arg("20")
        .arg("--top")
        .arg("1")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    let rows: Vec<&str> = stdout.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(rows, vec!["0\t3\t20.00"]);

    Ok(())
}

#[test]
fn command_search_oversized_k_fails() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let reference = temp.path().join("ref.fa");
    fs::write(&reference, ">r\nACGTACGTAC\n")?;

    let mut cmd = Command::cargo_bin("sear")?;
    cmd.arg("search").arg(&reference).arg("ACGT");
    // default k=11 exceeds the 4 bp query
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));

    Ok(())
}
