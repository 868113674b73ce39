//! Integration tests for the rank-agreement pipeline.
//!
//! These tests exercise the pieces together on small graphs with
//! known spectra and rankings, then run the sampled experiment
//! end-to-end.

use spectrank_core::{
    attachment_agreement, correlation_table, dominant_eigenvalue, katz_centrality, kendall_tau,
    render_table, CorrelationTable, Error, ExperimentConfig, KatzConfig, Network,
};

/// Path: 0 - 1 - ... - (n-1).
fn path_network(n: usize) -> Network {
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    Network::from_edges(n, &edges)
}

/// Cycle: a path closed back on node 0.
fn cycle_network(n: usize) -> Network {
    let mut edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    edges.push((n - 1, 0));
    Network::from_edges(n, &edges)
}

/// Complete graph on n nodes.
fn complete_network(n: usize) -> Network {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    Network::from_edges(n, &edges)
}

/// Star: hub 0 with n-1 leaves.
fn star_network(n: usize) -> Network {
    let edges: Vec<(usize, usize)> = (1..n).map(|leaf| (0, leaf)).collect();
    Network::from_edges(n, &edges)
}

// ============================================================================
// Spectrum
// ============================================================================

#[test]
fn test_spectrum_complete_graph() {
    let adjacency = complete_network(5).adjacency_matrix();
    let lambda = dominant_eigenvalue(&adjacency);
    assert!((lambda - 4.0).abs() < 1e-9, "K_5 has λ_max = 4, got {lambda}");
}

#[test]
fn test_spectrum_cycle() {
    // Every cycle is 2-regular, so λ_max = 2.
    let adjacency = cycle_network(6).adjacency_matrix();
    let lambda = dominant_eigenvalue(&adjacency);
    assert!((lambda - 2.0).abs() < 1e-9, "got {lambda}");
}

#[test]
fn test_spectrum_star() {
    let adjacency = star_network(5).adjacency_matrix();
    let lambda = dominant_eigenvalue(&adjacency);
    assert!((lambda - 2.0).abs() < 1e-9, "4-leaf star has λ_max = 2, got {lambda}");
}

#[test]
fn test_spectrum_edgeless_network() {
    // A network with no edges has spectrum {0}.
    let adjacency = Network::from_edges(4, &[]).adjacency_matrix();
    assert!(dominant_eigenvalue(&adjacency).abs() < 1e-12);
}

// ============================================================================
// Katz centrality on known structures
// ============================================================================

#[test]
fn test_katz_path_center_dominates() {
    let adjacency = path_network(5).adjacency_matrix();
    let lambda = dominant_eigenvalue(&adjacency);
    let config = KatzConfig {
        alpha: 0.5 / lambda,
        absolute: false,
    };
    let scores = katz_centrality(&adjacency, config).unwrap();

    assert!(scores[2] > scores[1], "center beats its neighbours");
    assert!(scores[1] > scores[0], "inner beats the end");
    assert!(
        (scores[0] - scores[4]).abs() < 1e-9,
        "mirror symmetry: {} vs {}",
        scores[0],
        scores[4]
    );
}

#[test]
fn test_katz_cycle_uniform() {
    // Vertex-transitive, so every score is the same.
    let adjacency = cycle_network(8).adjacency_matrix();
    let scores = katz_centrality(
        &adjacency,
        KatzConfig {
            alpha: 0.2,
            absolute: false,
        },
    )
    .unwrap();

    for i in 1..8 {
        assert!(
            (scores[i] - scores[0]).abs() < 1e-9,
            "node {i}: {} vs {}",
            scores[i],
            scores[0]
        );
    }
}

#[test]
fn test_katz_singular_pole() {
    // On a single edge, α = 1 sits exactly on the eigenvalue pole.
    let adjacency = Network::from_edges(2, &[(0, 1)]).adjacency_matrix();
    let result = katz_centrality(
        &adjacency,
        KatzConfig {
            alpha: 1.0,
            absolute: false,
        },
    );
    assert!(matches!(result, Err(Error::SingularSystem { .. })));
}

// ============================================================================
// Rankings and correlation
// ============================================================================

#[test]
fn test_star_hub_dominates_under_both_variants() {
    // Closed form on the 4-leaf star (λ_max = 2): standard at α = 0.3
    // gives hub 3.4375 vs leaf 2.03125; absolute at α = 0.75 gives
    // hub 3.2 vs leaf 2.5.
    let adjacency = star_network(5).adjacency_matrix();

    for (alpha, absolute) in [(0.3, false), (0.75, true)] {
        let scores = katz_centrality(&adjacency, KatzConfig { alpha, absolute }).unwrap();
        for leaf in 1..5 {
            assert!(
                scores[0] > scores[leaf],
                "hub must outrank leaf {leaf} at α = {alpha}"
            );
            assert!(
                (scores[leaf] - scores[1]).abs() < 1e-9,
                "leaves are interchangeable, got {} vs {}",
                scores[leaf],
                scores[1]
            );
        }
    }
}

#[test]
fn test_star_katz_agrees_with_degree() {
    let network = star_network(5);
    let adjacency = network.adjacency_matrix();
    let scores = katz_centrality(
        &adjacency,
        KatzConfig {
            alpha: 0.3,
            absolute: false,
        },
    )
    .unwrap();
    let degrees: Vec<f64> = network.degrees().iter().map(|&d| d as f64).collect();

    // Hub above leaves in both rankings. The leaf scores are equal in
    // exact arithmetic but may split by an ulp, which only raises the
    // tie correction; τ_b stays above 2/sqrt(10) either way.
    let tau = kendall_tau(scores.as_slice(), &degrees);
    assert!(tau > 0.6, "got {tau}");
    assert!(tau <= 1.0 + 1e-12, "got {tau}");
}

#[test]
fn test_subcritical_variants_agree_strongly() {
    // Two sub-critical attenuations rank a small scale-free network
    // almost identically.
    use rand::SeedableRng;
    let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(3);
    let adjacency = Network::barabasi_albert(40, 2, &mut rng)
        .unwrap()
        .adjacency_matrix();
    let lambda = dominant_eigenvalue(&adjacency);

    let low = katz_centrality(
        &adjacency,
        KatzConfig {
            alpha: 0.1 / lambda,
            absolute: false,
        },
    )
    .unwrap();
    let high = katz_centrality(
        &adjacency,
        KatzConfig {
            alpha: 0.8 / lambda,
            absolute: false,
        },
    )
    .unwrap();

    let tau = kendall_tau(low.as_slice(), high.as_slice());
    assert!(tau > 0.7, "sub-critical variants should agree, τ = {tau}");
}

// ============================================================================
// Sampled experiment
// ============================================================================

#[test]
fn test_agreement_deterministic_under_seed() {
    let first = attachment_agreement(20, 2, 2, 17).unwrap();
    let second = attachment_agreement(20, 2, 2, 17).unwrap();
    assert_eq!(first, second, "same seed must reproduce the row");
}

#[test]
fn test_agreement_tree_row() {
    // m = 1 grows a tree; all four τ values still land in range.
    let agreement = attachment_agreement(24, 1, 2, 4).unwrap();
    for tau in [
        agreement.k1_k2,
        agreement.k1_k3,
        agreement.k1_k4,
        agreement.k3_k4,
    ] {
        assert!((-1.0..=1.0).contains(&tau), "τ out of range: {tau}");
    }
}

#[test]
fn test_table_end_to_end() {
    let config = ExperimentConfig {
        nodes: 14,
        attachments: vec![1, 2],
        samples: 2,
        seed: 9,
    };
    let table = correlation_table(&config).unwrap();

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].attachments, 1);
    assert_eq!(table.rows[1].attachments, 2);
    for row in &table.rows {
        for tau in [
            row.agreement.k1_k2,
            row.agreement.k1_k3,
            row.agreement.k1_k4,
            row.agreement.k3_k4,
        ] {
            assert!((-1.0..=1.0).contains(&tau), "τ out of range: {tau}");
        }
    }

    let rendered = render_table(&table);
    assert_eq!(rendered.lines().count(), 2 + 5, "two rows plus framing");
    assert!(rendered.contains("(14,1)"));
    assert!(rendered.contains("(14,2)"));
}

#[test]
fn test_table_rerun_is_identical() {
    let config = ExperimentConfig {
        nodes: 12,
        attachments: vec![1, 2],
        samples: 1,
        seed: 33,
    };
    let first = correlation_table(&config).unwrap();
    let second = correlation_table(&config).unwrap();
    assert_eq!(render_table(&first), render_table(&second));
}

#[test]
fn test_table_json_roundtrip() {
    let config = ExperimentConfig {
        nodes: 10,
        attachments: vec![2],
        samples: 1,
        seed: 1,
    };
    let table = correlation_table(&config).unwrap();

    let json = serde_json::to_string_pretty(&table).unwrap();
    assert!(json.contains("\"k1_k2\""));
    let recovered: CorrelationTable = serde_json::from_str(&json).unwrap();
    assert_eq!(table, recovered);
}
