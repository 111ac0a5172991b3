use clap::{Arg, ArgAction, ArgMatches, Command};
use figg::libs::adj::Workspace;
use figg::libs::order::{read_genomes, GenomeSet};

/// Arguments shared by every subcommand.
pub fn common_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("infile")
            .required(true)
            .num_args(1)
            .index(1)
            .help("Gene order file. [stdin] for standard input"),
    )
    .arg(
        Arg::new("circular")
            .long("circular")
            .short('c')
            .action(ArgAction::SetTrue)
            .help("Genomes are circular; the last gene is adjacent to the first"),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .num_args(1)
            .help("Label of the genome that seeds the gene index [default: the first genome]"),
    )
    .arg(
        Arg::new("verbose")
            .long("verbose")
            .short('v')
            .action(ArgAction::SetTrue)
            .help("Print progress to stderr"),
    )
    .arg(
        Arg::new("outfile")
            .short('o')
            .long("outfile")
            .num_args(1)
            .default_value("stdout")
            .help("Output filename. [stdout] for screen"),
    )
}

/// Read the genomes named by `infile` and build their workspace.
pub fn load(args: &ArgMatches) -> anyhow::Result<(GenomeSet, Workspace)> {
    let infile = args.get_one::<String>("infile").unwrap();
    let circular = args.get_flag("circular");
    let verbose = args.get_flag("verbose");

    let genomes = read_genomes(figg::reader(infile)?, circular)?;
    if genomes.is_empty() {
        anyhow::bail!("No genomes found in {}", infile);
    }
    if verbose {
        eprintln!("==> Inputs");
        eprintln!("    infile   = {}", infile);
        eprintln!("    genomes  = {}", genomes.len());
        eprintln!("    circular = {}", circular);
    }

    let seed = match args.get_one::<String>("seed") {
        Some(label) => genomes
            .position(label)
            .ok_or_else(|| anyhow::anyhow!("Seed genome {} not found in {}", label, infile))?,
        None => 0,
    };

    let workspace = Workspace::build_with_seed(&genomes.orders, &genomes.labels, seed)?;
    if verbose {
        eprintln!("==> Workspace");
        eprintln!("    seed     = {}", genomes.labels[seed]);
        eprintln!("    genes    = {}", workspace.num_genes());
    }

    Ok((genomes, workspace))
}

/// Genome labels in adjacency-matrix-set order.
pub fn set_labels(genomes: &GenomeSet, workspace: &Workspace) -> Vec<String> {
    workspace
        .genome_order()
        .into_iter()
        .map(|i| genomes.labels[i].clone())
        .collect()
}
