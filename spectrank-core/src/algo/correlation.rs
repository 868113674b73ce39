//! Kendall rank correlation between score vectors.
//!
//! # Definition
//!
//! The τ-b statistic with tie correction:
//!
//! ```text
//! τ_b = (C - D) / sqrt((n₀ - T_x)(n₀ - T_y))
//! ```
//!
//! where `C`/`D` count concordant/discordant index pairs, `n₀ = n(n-1)/2`,
//! and `T_x`/`T_y` count pairs tied within each input.
//!
//! # Complexity
//!
//! O(n²) pairwise scan.

use std::cmp::Ordering;

/// Kendall τ-b between two score vectors.
///
/// Returns a value in `[-1, 1]`, or NaN when the inputs are too short,
/// have mismatched lengths, contain NaN, or when either ranking is
/// constant (zero tie-corrected variance).
///
/// # Example
///
/// ```
/// use spectrank_core::kendall_tau;
///
/// let tau = kendall_tau(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]);
/// assert!((tau - 1.0).abs() < 1e-12);
///
/// let tau = kendall_tau(&[1.0, 2.0, 3.0], &[30.0, 20.0, 10.0]);
/// assert!((tau + 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn kendall_tau(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n != y.len() || n < 2 {
        return f64::NAN;
    }
    if x.iter().chain(y.iter()).any(|value| value.is_nan()) {
        return f64::NAN;
    }

    let mut net = 0_i64; // concordant minus discordant
    let mut ties_x = 0_u64;
    let mut ties_y = 0_u64;

    for i in 0..n {
        for j in (i + 1)..n {
            let ord_x = x[i].total_cmp(&x[j]);
            let ord_y = y[i].total_cmp(&y[j]);

            if ord_x == Ordering::Equal {
                ties_x += 1;
            }
            if ord_y == Ordering::Equal {
                ties_y += 1;
            }
            if ord_x != Ordering::Equal && ord_y != Ordering::Equal {
                if ord_x == ord_y {
                    net += 1;
                } else {
                    net -= 1;
                }
            }
        }
    }

    let pair_count = (n * (n - 1) / 2) as f64;
    let denominator =
        ((pair_count - ties_x as f64) * (pair_count - ties_y as f64)).sqrt();
    net as f64 / denominator
}
