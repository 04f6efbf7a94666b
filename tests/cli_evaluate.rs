use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn command_evaluate_exact_reads() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let report = temp.path().join("report.txt");

    let mut cmd = Command::cargo_bin("sear")?;
    cmd.arg("evaluate")
        .arg("tests/data/ref.fa")
        .arg("tests/data/reads.csv")
        .arg("-o")
        .arg(&report);
    cmd.assert().success();

    let content = fs::read_to_string(&report)?;
    assert!(content.contains("queries:\t3"));
    assert!(content.contains("avg_hits:\t10.0"));
    // every recorded read is an exact substring, so the top choice nails it
    assert!(content.contains("top-1:\tboth\t3\tstart_only\t0\tend_only\t0"));
    assert!(content.contains("top-3:\tboth\t3\tstart_only\t0\tend_only\t0"));

    Ok(())
}

#[test]
fn command_evaluate_parallel_matches_serial() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let serial = temp.path().join("serial.txt");
    let parallel = temp.path().join("parallel.txt");

    for (out, threads) in [(&serial, "1"), (&parallel, "4")] {
        let mut cmd = Command::cargo_bin("sear")?;
        cmd.arg("evaluate")
            .arg("tests/data/ref.fa")
            .arg("tests/data/reads.csv")
            .arg("--parallel")
            .arg(threads)
            .arg("-o")
            .arg(out);
        cmd.assert().success();
    }

    // timings differ between runs; the correctness lines must not
    let counts = |path: &std::path::Path| -> anyhow::Result<Vec<String>> {
        Ok(fs::read_to_string(path)?
            .lines()
            .filter(|l| l.starts_with("top-") || l.starts_with("queries"))
            .map(|l| l.to_string())
            .collect())
    };
    assert_eq!(counts(&serial)?, counts(&parallel)?);

    Ok(())
}

#[test]
fn command_evaluate_weighted() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let report = temp.path().join("report.txt");

    let mut cmd = Command::cargo_bin("sear")?;
    cmd.arg("evaluate")
        .arg("tests/data/ref.fa")
        .arg("tests/data/reads.csv")
        .arg("--prob")
        .arg("tests/data/ref.prob")
        .arg("-c")
        .arg("2")
        .arg("-o")
        .arg(&report);
    cmd.assert().success();

    let content = fs::read_to_string(&report)?;
    assert!(content.contains("queries:\t3"));
    assert!(content.contains("top-1:\tboth\t3"));
    assert!(content.contains("top-2:\tboth\t3"));
    assert!(!content.contains("top-3:"));

    Ok(())
}

#[test]
fn command_evaluate_misplaced_record() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let reads = temp.path().join("reads.csv");
    let report = temp.path().join("report.txt");

    // the read truly sits at 37, the record claims 36
    fs::write(&reads, "36,TAACGTGCAACTTGGCATCG\n")?;

    let mut cmd = Command::cargo_bin("sear")?;
    cmd.arg("evaluate")
        .arg("tests/data/ref.fa")
        .arg(&reads)
        .arg("-o")
        .arg(&report);
    cmd.assert().success();

    let content = fs::read_to_string(&report)?;
    assert!(content.contains("queries:\t1"));
    assert!(content.contains("top-1:\tboth\t0\tstart_only\t0\tend_only\t0"));

    Ok(())
}

#[test]
fn command_evaluate_empty_reads() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let reads = temp.path().join("reads.csv");
    fs::write(&reads, "")?;

    let mut cmd = Command::cargo_bin("sear")?;
    let output = cmd
        .arg("evaluate")
        .arg("tests/data/ref.fa")
        .arg(&reads)
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("queries:\t0"));

    Ok(())
}
