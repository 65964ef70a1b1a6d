use anyhow::Context;
use clap::Args;
use log::info;
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

use graph_beans::common_io::{read_lines, write_lines};
use graph_beans::mtx_io::write_adjacency_mtx;
use graph_beans::partition::ClusterPartition;
use graph_beans::{sbm_adjacency_with_rng, ssbm_adjacency_with_rng, ssbm_cluster_sizes};
use nalgebra_sparse::CsrMatrix;

#[derive(Args, Debug)]
pub struct SsbmArgs {
    /// total number of vertices; `n % k` remainder vertices are padded
    /// onto the last cluster
    #[arg(long, short = 'n', required = true)]
    num_vertices: usize,

    /// number of clusters
    #[arg(long, short = 'k', required = true)]
    num_clusters: usize,

    /// within-cluster edge probability
    #[arg(long, short = 'p', default_value_t = 0.5)]
    p_within: f64,

    /// cross-cluster edge probability
    #[arg(long, short = 'q', default_value_t = 0.1)]
    p_between: f64,

    /// generate a directed graph
    #[arg(long, default_value_t = false)]
    directed: bool,

    /// random seed
    #[arg(long, default_value_t = 42)]
    rseed: u64,

    /// output header; writes `{out}.mtx.gz` and `{out}.membership.gz`
    #[arg(long, short, required = true)]
    out: Box<str>,

    /// verbosity
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Args, Debug)]
pub struct SbmArgs {
    /// cluster sizes (comma-separated), e.g., `40,30,30`
    #[arg(long, short = 'c', required = true, value_delimiter(','))]
    cluster_sizes: Vec<usize>,

    /// TSV file with the k x k edge-probability matrix Q
    #[arg(long, short = 'f', required = true)]
    prob_file: Box<str>,

    /// generate a directed graph (Q read as asymmetric)
    #[arg(long, default_value_t = false)]
    directed: bool,

    /// allow self-loop edges
    #[arg(long, default_value_t = false)]
    self_loops: bool,

    /// random seed
    #[arg(long, default_value_t = 42)]
    rseed: u64,

    /// output header; writes `{out}.mtx.gz` and `{out}.membership.gz`
    #[arg(long, short, required = true)]
    out: Box<str>,

    /// verbosity
    #[arg(long, short)]
    verbose: bool,
}

/// Generate a planted-partition graph and write it down
pub fn run_ssbm(args: &SsbmArgs) -> anyhow::Result<()> {
    if args.verbose {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(args.rseed);
    let adjacency = ssbm_adjacency_with_rng(
        args.num_vertices,
        args.num_clusters,
        args.p_within,
        args.p_between,
        args.directed,
        &mut rng,
    )?;

    let cluster_sizes = ssbm_cluster_sizes(args.num_vertices, args.num_clusters)?;
    let partition = ClusterPartition::new(&cluster_sizes);

    write_graph_outputs(&adjacency, &partition, &args.out)
}

/// Generate an SBM graph from explicit cluster sizes and write it down
pub fn run_sbm(args: &SbmArgs) -> anyhow::Result<()> {
    if args.verbose {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let prob_mat_q = read_prob_matrix(&args.prob_file)
        .with_context(|| format!("failed to read {}", args.prob_file))?;

    let mut rng = StdRng::seed_from_u64(args.rseed);
    let adjacency = sbm_adjacency_with_rng(
        &args.cluster_sizes,
        &prob_mat_q,
        args.directed,
        args.self_loops,
        &mut rng,
    )?;

    let partition = ClusterPartition::new(&args.cluster_sizes);

    write_graph_outputs(&adjacency, &partition, &args.out)
}

/// Read a whitespace/tab-delimited square probability matrix
fn read_prob_matrix(prob_file: &str) -> anyhow::Result<DMatrix<f64>> {
    let rows: Vec<Vec<f64>> = read_lines(prob_file)?
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|word| {
                    word.parse::<f64>()
                        .map_err(|err| anyhow::anyhow!("bad entry {:?}: {}", word, err))
                })
                .collect()
        })
        .collect::<anyhow::Result<_>>()?;

    let kk = rows.len();
    if kk == 0 || rows.iter().any(|row| row.len() != kk) {
        anyhow::bail!("probability matrix in {} is not square", prob_file);
    }
    Ok(DMatrix::from_fn(kk, kk, |ii, jj| rows[ii][jj]))
}

fn write_graph_outputs(
    adjacency: &CsrMatrix<f32>,
    partition: &ClusterPartition,
    out_hdr: &str,
) -> anyhow::Result<()> {
    let mtx_file = format!("{}.mtx.gz", out_hdr);
    let membership_file = format!("{}.membership.gz", out_hdr);

    write_adjacency_mtx(adjacency, &mtx_file)?;
    info!(
        "adjacency: {} x {} with {} non-zero entries -> {}",
        adjacency.nrows(),
        adjacency.ncols(),
        adjacency.nnz(),
        mtx_file
    );

    let membership_out: Vec<Box<str>> = partition
        .membership()
        .iter()
        .map(|&cluster| Box::from(cluster.to_string()))
        .collect();
    write_lines(&membership_out, &membership_file)?;
    info!("membership: {}", membership_file);

    Ok(())
}
