use anyhow::{anyhow, Result};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// ```
/// use std::io::BufRead;
/// let reader = sear::reader("tests/data/reads.csv");
/// assert_eq!(reader.lines().count(), 3);
/// ```
pub fn reader(input: &str) -> Box<dyn BufRead> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = match std::fs::File::open(path) {
            Err(why) => panic!("could not open {}: {}", path.display(), why),
            Ok(file) => file,
        };

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    reader
}

pub fn writer(output: &str) -> Box<dyn Write> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        Box::new(BufWriter::new(std::fs::File::create(output).unwrap()))
    };

    writer
}

/// First record of a FASTA file, as raw bytes. The reference is a single
/// contiguous sequence; later records are ignored.
pub fn read_reference(input: &str) -> Result<Vec<u8>> {
    let mut fa_in = noodles_fasta::io::Reader::new(reader(input));

    for result in fa_in.records() {
        let record = result?;
        return Ok(record.sequence().as_ref().to_vec());
    }

    Err(anyhow!("no sequence record in {}", input))
}

/// Reads `start,sequence` records, one per line. Blank lines and `#`
/// comments are skipped.
///
/// ```
/// let reads = sear::libs::io::read_reads("tests/data/reads.csv").unwrap();
/// assert_eq!(reads.len(), 3);
/// assert_eq!(reads[0].0, 0);
/// assert_eq!(reads[0].1.len(), 20);
/// ```
pub fn read_reads(input: &str) -> Result<Vec<(usize, Vec<u8>)>> {
    let reader = reader(input);
    let mut reads = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (start, seq) = line
            .split_once(',')
            .ok_or_else(|| anyhow!("malformed read record at line {}: {}", i + 1, line))?;
        let start = start.trim().parse::<usize>()?;
        reads.push((start, seq.trim().as_bytes().to_vec()));
    }

    Ok(reads)
}

/// Reads whitespace-separated per-position confidences.
pub fn read_probs(input: &str) -> Result<Vec<f64>> {
    let mut reader = reader(input);
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    buf.split_whitespace()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|e| anyhow!("bad confidence value {}: {}", field, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.csv");
        fs::write(&path, "# origin,read\n3,ACGT\n\n10, TTGA \n").unwrap();

        let reads = read_reads(path.to_str().unwrap()).unwrap();
        assert_eq!(reads.len(), 2);
        assert_eq!(reads[0], (3, b"ACGT".to_vec()));
        assert_eq!(reads[1], (10, b"TTGA".to_vec()));
    }

    #[test]
    fn test_read_reads_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.csv");
        fs::write(&path, "no-comma-here\n").unwrap();

        assert!(read_reads(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_read_probs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.prob");
        fs::write(&path, "0.9 0.8\n0.95\t1.0\n").unwrap();

        let probs = read_probs(path.to_str().unwrap()).unwrap();
        assert_eq!(probs, vec![0.9, 0.8, 0.95, 1.0]);
    }

    #[test]
    fn test_read_reference() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.fa");
        fs::write(&path, ">r1\nACGTACGT\n>r2\nTTTT\n").unwrap();

        let seq = read_reference(path.to_str().unwrap()).unwrap();
        assert_eq!(seq, b"ACGTACGT".to_vec());
    }
}
