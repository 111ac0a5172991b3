use clap::*;
use crate::cmd_figg::utils;
use figg::libs::adj::{adj_matrix_set, format, FreqMatrices};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("freq")
        .about("Frequency of each signed adjacency across genomes")
        .after_help(
            r###"
Cell (i, j) is the fraction of genomes in which gene i is immediately
followed by gene j, rounded to 4 decimals.

* --sign pos: gene j on the forward strand
* --sign neg: gene j on the reverse strand

Output format:
* TSV matrix with gene names as the header row and first column

Examples:
1. Forward adjacencies:
   figg freq genomes.txt

2. Reverse adjacencies:
   figg freq genomes.txt --sign neg -o neg.tsv
"###,
        )
        .arg(
            Arg::new("sign")
                .long("sign")
                .num_args(1)
                .value_parser(["pos", "neg"])
                .default_value("pos")
                .help("Which adjacencies to count"),
        );
    utils::common_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = figg::writer(args.get_one::<String>("outfile").unwrap())?;
    let sign = args.get_one::<String>("sign").unwrap();

    let (genomes, workspace) = utils::load(args)?;
    let set = adj_matrix_set(&workspace, &genomes.orders)?;
    let freqs = FreqMatrices::from_set(&set)?;

    let matrix = match sign.as_str() {
        "neg" => &freqs.negative,
        _ => &freqs.positive,
    };
    writer.write_all(format::matrix_tsv(&workspace.index.ids(), matrix).as_bytes())?;
    writer.flush()?;

    Ok(())
}
