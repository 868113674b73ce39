//! Scale-free network generation via preferential attachment.
//!
//! # Intuition
//!
//! In a Barabási–Albert network, newcomers prefer to link to nodes
//! that are already well connected. This "rich get richer" growth
//! produces the heavy-tailed degree distributions observed in citation
//! graphs, the web, and social networks, with a few hubs and many
//! low-degree leaves.
//!
//! # Algorithm
//!
//! Growth starts from a star on `m + 1` nodes. Every arriving node
//! draws `m` *distinct* targets from a multiset that holds each
//! existing node once per unit of degree, wires up, and then enters the
//! multiset itself (once per new edge endpoint). Drawing uniformly from
//! the multiset is what makes attachment proportional to degree.
//!
//! The resulting network is connected, simple, and has exactly
//! `m * (n - m)` edges.
//!
//! # References
//!
//! - Barabási & Albert (1999). "Emergence of scaling in random networks"

use crate::error::{Error, Result};
use nalgebra::DMatrix;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rand::prelude::*;

/// An undirected simple network with `usize`-addressed nodes.
///
/// Wraps a [`petgraph`] graph; nodes are identified by their insertion
/// order, `0..node_count()`.
#[derive(Debug, Clone)]
pub struct Network {
    graph: UnGraph<(), ()>,
}

impl Network {
    /// Grow a Barabási–Albert network with `n` nodes where every
    /// arriving node attaches `m` edges.
    ///
    /// Requires `1 <= m < n`. The same `rng` state always grows the
    /// same network.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_xorshift::XorShiftRng;
    /// use spectrank_core::Network;
    ///
    /// let mut rng = XorShiftRng::seed_from_u64(7);
    /// let network = Network::barabasi_albert(100, 3, &mut rng)?;
    ///
    /// assert_eq!(network.node_count(), 100);
    /// assert_eq!(network.edge_count(), 3 * (100 - 3));
    /// # Ok::<(), spectrank_core::Error>(())
    /// ```
    pub fn barabasi_albert<R: Rng>(n: usize, m: usize, rng: &mut R) -> Result<Self> {
        if m < 1 || m >= n {
            return Err(Error::InvalidAttachment { m, n });
        }

        let mut graph = UnGraph::<(), ()>::with_capacity(n, m * (n - m));

        // Seed star: hub 0 connected to leaves 1..=m.
        let hub = graph.add_node(());
        for _ in 0..m {
            let leaf = graph.add_node(());
            graph.add_edge(hub, leaf, ());
        }

        // Attachment multiset: one entry per unit of degree. A Vec
        // keeps the entry order (and thus the draws) identical
        // run-to-run under one seed.
        let mut endpoints: Vec<NodeIndex> = Vec::with_capacity(2 * m * (n - m));
        for node in graph.node_indices() {
            let degree = graph.neighbors(node).count();
            endpoints.extend(std::iter::repeat(node).take(degree));
        }

        while graph.node_count() < n {
            let targets = distinct_draws(&endpoints, m, rng);
            let source = graph.add_node(());
            for &target in &targets {
                graph.add_edge(source, target, ());
            }
            endpoints.extend_from_slice(&targets);
            endpoints.extend(std::iter::repeat(source).take(m));
        }

        Ok(Self { graph })
    }

    /// Build a network with `n` nodes and the given edges.
    ///
    /// Node indices must lie in `0..n`. Edges are added as given.
    #[must_use]
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = UnGraph::<(), ()>::with_capacity(n, edges.len());
        for _ in 0..n {
            graph.add_node(());
        }
        for &(a, b) in edges {
            graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        Self { graph }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Degree of one node.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.graph.neighbors(NodeIndex::new(node)).count()
    }

    /// Degrees of all nodes, in node order.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.graph
            .node_indices()
            .map(|node| self.graph.neighbors(node).count())
            .collect()
    }

    /// Dense 0/1 adjacency matrix.
    ///
    /// Symmetric with a zero diagonal; entry `(i, j)` is 1.0 exactly
    /// when nodes `i` and `j` share an edge.
    #[must_use]
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.graph.node_count();
        let mut adjacency = DMatrix::zeros(n, n);
        for edge in self.graph.edge_references() {
            let (i, j) = (edge.source().index(), edge.target().index());
            adjacency[(i, j)] = 1.0;
            adjacency[(j, i)] = 1.0;
        }
        adjacency
    }

    /// Access the underlying petgraph structure.
    #[must_use]
    pub fn as_petgraph(&self) -> &UnGraph<(), ()> {
        &self.graph
    }
}

/// Draw `m` distinct nodes from the attachment multiset.
///
/// Repeats degree-weighted draws until `m` distinct targets
/// accumulate. `pool` must contain at least `m` distinct values or
/// this loops forever; the star seed guarantees that.
fn distinct_draws<R: Rng>(pool: &[NodeIndex], m: usize, rng: &mut R) -> Vec<NodeIndex> {
    let mut targets: Vec<NodeIndex> = Vec::with_capacity(m);
    while targets.len() < m {
        let candidate = pool[rng.random_range(0..pool.len())];
        if !targets.contains(&candidate) {
            targets.push(candidate);
        }
    }
    targets
}
