use clap::*;
use crate::cmd_figg::utils;
use figg::libs::adj::{adj_matrix_set, format};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("adj")
        .about("Lists the signed adjacencies of each genome")
        .after_help(
            r###"
Prints every nonzero cell of every genome's adjacency matrix.

Output format (TSV):
  genome	from	to	sign
  A	g1	g2	+1
  B	g1	g2	-1

The sign is that of the second gene: -1 when it lies on the reverse strand.
Genomes are listed seed first, then in input order.

Examples:
1. Adjacencies of linear genomes:
   figg adj genomes.txt

2. Include the wrap-around adjacency of circular genomes:
   figg adj genomes.txt --circular
"###,
        );
    utils::common_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = figg::writer(args.get_one::<String>("outfile").unwrap())?;

    let (genomes, workspace) = utils::load(args)?;
    let set = adj_matrix_set(&workspace, &genomes.orders)?;
    let labels = utils::set_labels(&genomes, &workspace);

    for (label, matrix) in labels.iter().zip(set.iter()) {
        writer.write_all(format::adjacency_tsv(label, matrix, &workspace.index).as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}
