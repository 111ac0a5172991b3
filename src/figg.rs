extern crate clap;
use clap::*;

mod cmd_figg;

fn main() -> anyhow::Result<()> {
    let app = Command::new("figg")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`figg` - Gene-order adjacency distances between genomes")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_figg::workspace::make_subcommand())
        .subcommand(cmd_figg::adj::make_subcommand())
        .subcommand(cmd_figg::freq::make_subcommand())
        .subcommand(cmd_figg::dist::make_subcommand())
        .after_help(
            r###"Subcommands:

* workspace - Gene index shared by all genomes
* adj       - Signed adjacencies of each genome
* freq      - Adjacency frequencies across genomes
* dist      - Pairwise distances (AD, or ADc with --corrected)

Input: one genome per line, a label followed by gene tokens; `-g1` is g1 on
the reverse strand.

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("workspace", sub_matches)) => cmd_figg::workspace::execute(sub_matches),
        Some(("adj", sub_matches)) => cmd_figg::adj::execute(sub_matches),
        Some(("freq", sub_matches)) => cmd_figg::freq::execute(sub_matches),
        Some(("dist", sub_matches)) => cmd_figg::dist::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
