//! Fixed-width text rendering of the correlation table.

use crate::experiment::CorrelationTable;

/// Width of the horizontal rules framing the table.
const RULE_WIDTH: usize = 85;

/// Render the correlation table in its published fixed-width layout.
///
/// Network labels read `({n},{m})`; τ columns carry three decimals.
/// The returned string ends with a newline and is ready to print.
#[must_use]
pub fn render_table(table: &CorrelationTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 5);

    lines.push("Table 7: Kendall coefficients for generalized Katz centrality".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!(
        "{:<12} {:<10} {:<10} {:<10} {:<10}",
        "Network", "τ(k₁,k₂)", "τ(k₁,k₃)", "τ(k₁,k₄)", "τ(k₃,k₄)"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    for row in &table.rows {
        let label = format!("({},{})", table.nodes, row.attachments);
        lines.push(format!(
            "{:<12} {:<10.3} {:<10.3} {:<10.3} {:<10.3}",
            label,
            row.agreement.k1_k2,
            row.agreement.k1_k3,
            row.agreement.k1_k4,
            row.agreement.k3_k4
        ));
    }

    lines.push("=".repeat(RULE_WIDTH));

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
