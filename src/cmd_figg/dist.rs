use clap::*;
use crate::cmd_figg::utils;
use figg::libs::adj::freq::round4;
use figg::libs::adj::{
    adj_matrix_set, dist_matrix, dist_matrix_corrected, format, mirror_lower, FreqMatrices,
};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("dist")
        .about("Pairwise adjacency distances between genomes")
        .after_help(
            r###"
Counts, for each pair of genomes, the cells where their signed adjacency
matrices differ (AD).

With --corrected, each difference is weighted by how rare the adjacency is
across all genomes (ADc): a difference on an adjacency most genomes share
counts less.

Output format:
* Relaxed PHYLIP distance matrix, genomes ordered seed first
* --lower keeps the lower triangle only

Examples:
1. Raw distances:
   figg dist genomes.txt

2. Frequency-corrected distances of circular genomes:
   figg dist genomes.txt --circular --corrected -o dist.phy

3. Build a tree downstream:
   figg dist genomes.txt | pgr mat nj stdin
"###,
        )
        .arg(
            Arg::new("corrected")
                .long("corrected")
                .action(ArgAction::SetTrue)
                .help("Weight differences by adjacency frequencies (ADc)"),
        )
        .arg(
            Arg::new("lower")
                .long("lower")
                .action(ArgAction::SetTrue)
                .help("Write the lower triangle only"),
        );
    utils::common_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = figg::writer(args.get_one::<String>("outfile").unwrap())?;
    let is_corrected = args.get_flag("corrected");
    let is_lower = args.get_flag("lower");
    let verbose = args.get_flag("verbose");

    let (genomes, workspace) = utils::load(args)?;
    let set = adj_matrix_set(&workspace, &genomes.orders)?;
    let labels = utils::set_labels(&genomes, &workspace);

    if verbose {
        eprintln!("==> Distances");
        eprintln!("    matrices  = {}", set.len());
        eprintln!("    corrected = {}", is_corrected);
    }

    let out = if is_corrected {
        let freqs = FreqMatrices::from_set(&set)?;
        let dist = dist_matrix_corrected(&set, &freqs)?.map(round4);
        let dist = if is_lower { dist } else { mirror_lower(&dist) };
        format::phylip(&labels, &dist, is_lower)
    } else {
        let dist = dist_matrix(&set)?;
        let dist = if is_lower { dist } else { mirror_lower(&dist) };
        format::phylip(&labels, &dist, is_lower)
    };
    writer.write_all(out.as_bytes())?;
    writer.flush()?;

    Ok(())
}
