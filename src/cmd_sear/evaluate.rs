use clap::*;
use rayon::prelude::*;
use std::io::Write;
use std::time::Instant;

use sear::libs::align::{
    evaluate_correctness, find_local_alignments, Correctness, ProbTable, SearchParams,
};
use sear::libs::nt;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("evaluate")
        .about("Batch-aligns recorded reads and reports top-k correctness")
        .after_help(
            r###"
The reads file records one `start,sequence` pair per line, as written
by `sear generate`. Every read is aligned back to the reference and the
ranked spans are compared against the recorded origin.

The report lists, for each of the top 1..=NUM ranks, how many reads had
their exact span found within that many choices, plus start-only and
end-only near misses (an exact find is not double-counted as either).
Averages cover search time and raw hit counts.

Reads fan out over a thread pool; the reference and the confidence
table are shared read-only.

Examples:
1. Literal scoring, top-3 report:
   sear evaluate ref.fa reads.csv -o report.txt

2. Confidence-weighted scoring over 4 threads:
   sear evaluate ref.fa reads.csv --prob ref.prob --parallel 4
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Reference FASTA file"),
        )
        .arg(
            Arg::new("reads")
                .required(true)
                .index(2)
                .help("Recorded reads, `start,sequence` per line"),
        )
        .arg(
            Arg::new("prob")
                .long("prob")
                .value_name("FILE")
                .help("Per-position confidence file; enables weighted scoring"),
        )
        .arg(
            Arg::new("num_choices")
                .long("num-choices")
                .short('c')
                .value_parser(value_parser!(usize))
                .default_value("3")
                .help("How many top choices to examine"),
        )
        .arg(
            Arg::new("k")
                .long("k")
                .short('k')
                .value_parser(value_parser!(usize))
                .default_value("11")
                .help("Seed length"),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .value_parser(value_parser!(f64))
                .default_value("5")
                .help("Match score"),
        )
        .arg(
            Arg::new("mismatch")
                .long("mismatch")
                .value_parser(value_parser!(f64))
                .allow_hyphen_values(true)
                .default_value("-4")
                .help("Mismatch score"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_parser(value_parser!(f64))
                .allow_hyphen_values(true)
                .default_value("45")
                .help("Minimum window score for a hit"),
        )
        .arg(
            Arg::new("cutoff")
                .long("cutoff")
                .value_parser(value_parser!(f64))
                .allow_hyphen_values(true)
                .default_value("-15")
                .help("X-drop cutoff (negative)"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .short('p')
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("Number of threads"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let reads_file = args.get_one::<String>("reads").unwrap();
    let num_choices = *args.get_one::<usize>("num_choices").unwrap();
    let parallel = *args.get_one::<usize>("parallel").unwrap();
    let mut writer = sear::writer(args.get_one::<String>("outfile").unwrap());

    let params = SearchParams {
        k: *args.get_one::<usize>("k").unwrap(),
        match_score: *args.get_one::<f64>("match").unwrap(),
        mismatch_score: *args.get_one::<f64>("mismatch").unwrap(),
        threshold: *args.get_one::<f64>("threshold").unwrap(),
        cutoff: *args.get_one::<f64>("cutoff").unwrap(),
    };

    //----------------------------
    // Init
    //----------------------------
    let reference = sear::libs::io::read_reference(infile)?;
    let reads = sear::libs::io::read_reads(reads_file)?;

    let table = match args.get_one::<String>("prob") {
        Some(prob_file) => {
            let confidences = sear::libs::io::read_probs(prob_file)?;
            let alphabet = nt::alphabet_of(&reference);
            Some(ProbTable::build(&reference, &confidences, &alphabet)?)
        }
        None => None,
    };

    //----------------------------
    // Process
    //----------------------------
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallel)
        .build()?;

    let outcomes: Vec<(f64, usize, Correctness)> = pool.install(|| {
        reads
            .par_iter()
            .map(|(true_start, read)| -> anyhow::Result<(f64, usize, Correctness)> {
                let begin = Instant::now();
                let result = find_local_alignments(read, &reference, &params, table.as_ref())?;
                let elapsed_ms = begin.elapsed().as_secs_f64() * 1000.0;

                let corr =
                    evaluate_correctness(*true_start, read.len(), &result.candidates, num_choices);
                Ok((elapsed_ms, result.hit_count, corr))
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })?;

    //----------------------------
    // Output
    //----------------------------
    let n = outcomes.len();
    writer.write_fmt(format_args!("queries:\t{}\n", n))?;

    if n == 0 {
        return Ok(());
    }

    let avg_time: f64 = outcomes.iter().map(|o| o.0).sum::<f64>() / n as f64;
    let avg_hits: f64 = outcomes.iter().map(|o| o.1 as f64).sum::<f64>() / n as f64;
    writer.write_fmt(format_args!("avg_time_ms:\t{:.3}\n", avg_time))?;
    writer.write_fmt(format_args!("avg_hits:\t{:.1}\n", avg_hits))?;

    for k in 0..num_choices {
        let both = outcomes.iter().filter(|o| o.2.both[k]).count();
        let start_only = outcomes.iter().filter(|o| o.2.start_only[k]).count();
        let end_only = outcomes.iter().filter(|o| o.2.end_only[k]).count();

        writer.write_fmt(format_args!(
            "top-{}:\tboth\t{}\tstart_only\t{}\tend_only\t{}\n",
            k + 1,
            both,
            start_only,
            end_only
        ))?;
    }

    Ok(())
}
