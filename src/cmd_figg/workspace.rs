use clap::*;
use crate::cmd_figg::utils;
use figg::libs::adj::format;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("workspace")
        .about("Lists the gene index shared by all genomes")
        .after_help(
            r###"
Builds the gene index: the genes of the seed genome in order, then every gene
not seen before, genome by genome.

Input format:
* One genome per line: a label, then gene tokens separated by whitespace
* A leading '-' marks a gene on the reverse strand
* Lines starting with '#' are comments

Output format (TSV):
  index	gene	first_seen
  0	g1	A
  ...

Examples:
1. Gene index of linear genomes:
   figg workspace genomes.txt

2. Circular genomes, seeded by genome B:
   figg workspace genomes.txt --circular --seed B
"###,
        );
    utils::common_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = figg::writer(args.get_one::<String>("outfile").unwrap())?;

    let (_, workspace) = utils::load(args)?;

    writer.write_all(format::workspace_tsv(&workspace).as_bytes())?;
    writer.flush()?;

    Ok(())
}
