use clap::*;
use std::io::Write;

use sear::libs::align::{find_local_alignments, ProbTable, SearchParams};
use sear::libs::nt;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("search")
        .about("Ranks local alignments of one query against the reference")
        .after_help(
            r###"
Seeds of length -k are cut from the query with stride 1. Every reference
window scoring at least --threshold becomes a hit, and each hit is
extended in both directions until the running score falls more than
|--cutoff| below the best seen. Spans are deduplicated, keeping the
best score per span, and ranked by score (ties: ascending start, then
end).

With --prob, the match/mismatch pair is weighted by the per-position
confidence of the reference call instead of comparing against the
reference text.

Output is a TSV of `start  end  score` with 0-based inclusive bounds,
preceded by a `# hits:` comment.

Examples:
1. Literal scoring:
   sear search ref.fa TAACGTGCAACTTGGCATCG

2. Confidence-weighted scoring, best 5 spans only:
   sear search ref.fa TAACGTGCAACTTGGCATCG --prob ref.prob --top 5

3. Small seeds for a short query:
   sear search ref.fa ACGTACGT -k 4 --threshold 20
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Reference FASTA file"),
        )
        .arg(
            Arg::new("query")
                .required(true)
                .index(2)
                .help("Query sequence"),
        )
        .arg(
            Arg::new("prob")
                .long("prob")
                .value_name("FILE")
                .help("Per-position confidence file; enables weighted scoring"),
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
            Arg::new("top")
                .long("top")
                .value_parser(value_parser!(usize))
                .help("Only print the best N spans"),
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
    let query = args.get_one::<String>("query").unwrap().as_bytes().to_vec();
    if let Some(&bad) = query
        .iter()
        .find(|&&b| matches!(nt::to_nt(b), nt::Nt::Invalid))
    {
        return Err(anyhow::anyhow!(
            "query contains a non-nucleotide symbol: {:?}",
            bad as char
        ));
    }
    let top = args.get_one::<usize>("top").copied();
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
    let result = find_local_alignments(&query, &reference, &params, table.as_ref())?;

    //----------------------------
    // Output
    //----------------------------
    writer.write_fmt(format_args!("# hits:\t{}\n", result.hit_count))?;

    let shown = match top {
        Some(n) => &result.candidates[..n.min(result.candidates.len())],
        None => &result.candidates[..],
    };
    for cand in shown {
        writer.write_fmt(format_args!(
            "{}\t{}\t{:.2}\n",
            cand.start, cand.end, cand.score
        ))?;
    }

    Ok(())
}
