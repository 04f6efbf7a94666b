use clap::*;
use rand::Rng;
use rand::SeedableRng;
use std::io::Write;

use sear::libs::align::ProbTable;
use sear::libs::nt;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("generate")
        .about("Samples noisy reads from a reference and its per-base confidences")
        .after_help(
            r###"
Each output line records where a read was drawn from and what was read:

    start,sequence

Starts are 0-based and sampled uniformly. Read positions are sampled
independently: at reference position p, the called base is emitted with
its stated confidence, and every other symbol of the alphabet shares
the remainder uniformly. The confidence file holds one value per
reference position, whitespace-separated, each in (0,1].

Examples:
1. 100 reads of 100 bp:
   sear generate ref.fa ref.prob -o reads.csv

2. Short reads for a quick smoke test:
   sear generate ref.fa ref.prob -n 10 -l 25 --seed 7
"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Reference FASTA file"),
        )
        .arg(
            Arg::new("prob")
                .required(true)
                .index(2)
                .help("Per-position confidence file"),
        )
        .arg(
            Arg::new("num")
                .long("num")
                .short('n')
                .value_parser(value_parser!(usize))
                .default_value("100")
                .help("Number of reads to generate"),
        )
        .arg(
            Arg::new("len")
                .long("len")
                .short('l')
                .value_parser(value_parser!(usize))
                .default_value("100")
                .help("Length of each read"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .default_value("42")
                .help("Random seed"),
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
    let prob_file = args.get_one::<String>("prob").unwrap();
    let num = *args.get_one::<usize>("num").unwrap();
    let len = *args.get_one::<usize>("len").unwrap();
    let seed = *args.get_one::<u64>("seed").unwrap();
    let mut writer = sear::writer(args.get_one::<String>("outfile").unwrap());

    //----------------------------
    // Init
    //----------------------------
    let reference = sear::libs::io::read_reference(infile)?;
    if len == 0 || len > reference.len() {
        return Err(anyhow::anyhow!(
            "read length {} does not fit the reference ({} bp)",
            len,
            reference.len()
        ));
    }

    let confidences = sear::libs::io::read_probs(prob_file)?;
    let alphabet = nt::alphabet_of(&reference);
    let table = ProbTable::build(&reference, &confidences, &alphabet)?;

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    //----------------------------
    // Process
    //----------------------------
    let mut read = Vec::with_capacity(len);
    for _ in 0..num {
        let start = rng.gen_range(0..=reference.len() - len);

        read.clear();
        for pos in start..start + len {
            read.push(table.sample(pos, &mut rng));
        }

        writer.write_fmt(format_args!(
            "{},{}\n",
            start,
            String::from_utf8_lossy(&read)
        ))?;
    }

    Ok(())
}
