extern crate clap;
use clap::*;

mod cmd_sear;

fn main() -> anyhow::Result<()> {
    let app = Command::new("sear")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`sear` - Seed-and-Extend Alignment of Reads")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_sear::generate::make_subcommand())
        .subcommand(cmd_sear::search::make_subcommand())
        .subcommand(cmd_sear::evaluate::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Test data:
    * generate - Sample noisy reads from a reference and its confidences

* Alignment:
    * search   - Rank local alignments of one query
    * evaluate - Batch-align recorded reads and report correctness

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("generate", sub_matches)) => cmd_sear::generate::execute(sub_matches),
        Some(("search", sub_matches)) => cmd_sear::search::execute(sub_matches),
        Some(("evaluate", sub_matches)) => cmd_sear::evaluate::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
