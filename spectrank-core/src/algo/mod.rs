//! Numerical building blocks of the rank-agreement pipeline.
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`spectral`] | dominant eigenvalue of a dense adjacency matrix |
//! | [`katz`] | resolvent Katz centrality, standard and absolute |
//! | [`correlation`] | Kendall τ-b rank correlation |

pub mod correlation;
pub mod katz;
pub mod spectral;
