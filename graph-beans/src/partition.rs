//! Cluster partition bookkeeping.
//!
//! Vertices are numbered by concatenating clusters in order: cluster `i`
//! occupies the half-open global range `[offset(i), offset(i) + size(i))`,
//! so the ranges are contiguous, non-overlapping, and cover `[0, n)`
//! exactly once.

/// An ordered partition of the vertex set into clusters, with precomputed
/// prefix-sum base offsets.
#[derive(Debug, Clone)]
pub struct ClusterPartition {
    sizes: Vec<usize>,
    offsets: Vec<usize>,
    num_vertices: usize,
}

impl ClusterPartition {
    /// Build a partition from cluster sizes. Zero-size clusters are legal
    /// and simply contribute no vertices.
    pub fn new(sizes: &[usize]) -> Self {
        let mut offsets = Vec::with_capacity(sizes.len());
        let mut acc = 0;
        for &size in sizes {
            offsets.push(acc);
            acc += size;
        }
        Self {
            sizes: sizes.to_vec(),
            offsets,
            num_vertices: acc,
        }
    }

    pub fn num_clusters(&self) -> usize {
        self.sizes.len()
    }

    /// Total number of vertices across all clusters
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn size(&self, cluster: usize) -> usize {
        self.sizes[cluster]
    }

    /// Global index of the first vertex in `cluster`
    pub fn offset(&self, cluster: usize) -> usize {
        self.offsets[cluster]
    }

    /// Cluster label of every vertex, in global vertex order
    pub fn membership(&self) -> Vec<usize> {
        let mut labels = Vec::with_capacity(self.num_vertices);
        for (cluster, &size) in self.sizes.iter().enumerate() {
            labels.extend(std::iter::repeat(cluster).take(size));
        }
        labels
    }
}
