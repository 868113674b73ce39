// Allow pedantic clippy style lints at crate level; these are
// stylistic preferences, not correctness issues.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]

//! Rank agreement between generalized Katz centralities on scale-free
//! networks.
//!
//! The crate samples Barabási–Albert networks, scores every node with
//! the resolvent form of Katz centrality at several attenuation
//! factors (including super-critical ones, where the element-wise
//! absolute resolvent is used), and measures how well the resulting
//! rankings agree via Kendall's τ:
//!
//! - [`Network`] - scale-free network generation
//! - [`dominant_eigenvalue`] - λ_max of a dense adjacency matrix
//! - [`katz_centrality`] - resolvent Katz scores, standard or absolute
//! - [`kendall_tau`] - tie-corrected rank correlation
//! - [`correlation_table`] - the sampled rank-agreement experiment
//! - [`render_table`] - fixed-width text table of the results
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_xorshift::XorShiftRng;
//! use spectrank_core::{dominant_eigenvalue, katz_centrality, KatzConfig, Network};
//!
//! let mut rng = XorShiftRng::seed_from_u64(42);
//! let network = Network::barabasi_albert(50, 2, &mut rng)?;
//! let adjacency = network.adjacency_matrix();
//!
//! // Attenuate at half the convergence bound.
//! let lambda_max = dominant_eigenvalue(&adjacency);
//! let config = KatzConfig { alpha: 0.5 / lambda_max, ..KatzConfig::default() };
//! let scores = katz_centrality(&adjacency, config)?;
//!
//! assert!(scores.iter().all(|&score| score > 0.0));
//! # Ok::<(), spectrank_core::Error>(())
//! ```

pub mod algo;
mod error;
mod experiment;
mod network;
mod report;

pub use algo::correlation::kendall_tau;
pub use algo::katz::{katz_centrality, KatzConfig};
pub use algo::spectral::dominant_eigenvalue;
pub use error::{Error, Result};
pub use experiment::{
    attachment_agreement, correlation_table, CorrelationTable, ExperimentConfig, RankAgreement,
    TableRow, ALPHA_MULTIPLES,
};
pub use network::Network;
pub use report::render_table;

// Re-export the graph and matrix crates whose types appear in the API
pub use nalgebra;
pub use petgraph;
