mod run_generate;

use clap::{Parser, Subcommand};
use log::info;
use run_generate::*;

/// Lightweight Edge-sampling Network Tool for Inter-cluster Links
#[derive(Parser, Debug)]
#[command(
    version,
    about = "LENTIL",
    long_about = "Lightweight Edge-sampling Network Tool for Inter-cluster Links\n\
		  Generates sparse adjacency matrices from the stochastic\n\
		  block model, writing MatrixMarket output with the\n\
		  true cluster membership alongside."
)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Generate a planted-partition (symmetric SBM) graph",
        long_about = "Generate a graph with `k` equally sized clusters where\n\
		      within-cluster edges appear with probability `p` and\n\
		      cross-cluster edges with probability `q`. Remainder\n\
		      vertices (`n % k`) are padded onto the last cluster.\n",
        visible_alias = "planted"
    )]
    Ssbm(SsbmArgs),

    #[command(
        about = "Generate an SBM graph from explicit cluster sizes and a Q matrix",
        long_about = "Generate a graph from a list of cluster sizes and a\n\
		      k x k edge-probability matrix Q read from a TSV file.\n\
		      Q[i,j] is the probability of an edge between clusters\n\
		      i and j; only the upper triangle is consulted in the\n\
		      undirected case.\n"
    )]
    Sbm(SbmArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.commands {
        Commands::Ssbm(args) => {
            run_ssbm(args)?;
        }
        Commands::Sbm(args) => {
            run_sbm(args)?;
        }
    }

    info!("Done");
    Ok(())
}
