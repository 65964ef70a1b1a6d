use crate::common_io::open_buf_writer;
use nalgebra_sparse::CsrMatrix;
use std::io::Write;

/// Write the triplets into a MatrixMarket file with 1-based indices
/// * `triplets` - the triplets to write, 0-based
/// * `nrow` - number of rows
/// * `ncol` - number of columns
/// * `mtx_file` - the output file (e.g., "adjacency.mtx.gz")
pub fn write_mtx_triplets(
    triplets: &[(usize, usize, f32)],
    nrow: usize,
    ncol: usize,
    mtx_file: &str,
) -> anyhow::Result<()> {
    if let Some(parent_dir) = std::path::Path::new(mtx_file).parent() {
        std::fs::create_dir_all(parent_dir)?;
    }

    let mut buf = open_buf_writer(mtx_file)?;

    // write the header
    let nnz = triplets.len();
    writeln!(buf, "%%MatrixMarket matrix coordinate real general")?;
    writeln!(buf, "{}\t{}\t{}", nrow, ncol, nnz)?;

    // write them with 1-based indices
    for (row, col, val) in triplets {
        writeln!(buf, "{}\t{}\t{}", row + 1, col + 1, val)?;
    }

    buf.flush()?;
    Ok(())
}

/// Write a sparse adjacency matrix as MatrixMarket coordinate triplets.
pub fn write_adjacency_mtx(adjacency: &CsrMatrix<f32>, mtx_file: &str) -> anyhow::Result<()> {
    let triplets: Vec<(usize, usize, f32)> = adjacency
        .triplet_iter()
        .map(|(row, col, val)| (row, col, *val))
        .collect();
    write_mtx_triplets(&triplets, adjacency.nrows(), adjacency.ncols(), mtx_file)
}
