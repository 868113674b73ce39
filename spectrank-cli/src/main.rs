//! Spectrank CLI - Katz rank-agreement experiments from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Reproduce the published correlation table
//! spectrank table
//!
//! # A smaller, faster run, exported as JSON
//! spectrank table --nodes 50 -m 2 -m 5 --samples 3 --format json -o table.json
//!
//! # Inspect one sampled network
//! spectrank generate --nodes 200 -m 5
//!
//! # Top nodes by Katz score at 0.8/λ_max
//! spectrank katz --nodes 200 -m 5 --multiple 0.8 --top 10
//! ```

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use spectrank_core::{
    attachment_agreement, dominant_eigenvalue, katz_centrality, render_table, CorrelationTable,
    KatzConfig, Network, TableRow,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "spectrank")]
#[command(about = "Katz centrality rank-agreement experiments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reproduce the Kendall rank-agreement table
    Table {
        /// Nodes per sampled network
        #[arg(long, default_value_t = 200)]
        nodes: usize,

        /// Attachment counts, one table row each
        #[arg(short = 'm', long, default_values_t = [1, 2, 3, 5, 6, 7, 8, 10, 15, 40])]
        attachments: Vec<usize>,

        /// Networks sampled and averaged per row
        #[arg(long, default_value_t = 5)]
        samples: usize,

        /// Base RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write the table to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate one scale-free network and print its statistics
    Generate {
        /// Number of nodes
        #[arg(long, default_value_t = 200)]
        nodes: usize,

        /// Edges attached by each arriving node
        #[arg(short = 'm', long, default_value_t = 5)]
        attachments: usize,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Rank the nodes of one sampled network by Katz score
    Katz {
        /// Number of nodes
        #[arg(long, default_value_t = 200)]
        nodes: usize,

        /// Edges attached by each arriving node
        #[arg(short = 'm', long, default_value_t = 5)]
        attachments: usize,

        /// Attenuation as a multiple of 1/λ_max; at 1 and beyond the
        /// absolute resolvent is used
        #[arg(long, default_value_t = 0.8)]
        multiple: f64,

        /// How many top-ranked nodes to print
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Fixed-width text table
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Table {
            nodes,
            attachments,
            samples,
            seed,
            format,
            output,
        } => cmd_table(nodes, &attachments, samples, seed, format, output.as_deref()),
        Commands::Generate {
            nodes,
            attachments,
            seed,
        } => cmd_generate(nodes, attachments, seed),
        Commands::Katz {
            nodes,
            attachments,
            multiple,
            top,
            seed,
        } => cmd_katz(nodes, attachments, multiple, top, seed),
    }
}

fn cmd_table(
    nodes: usize,
    attachments: &[usize],
    samples: usize,
    seed: u64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let mut rows = Vec::with_capacity(attachments.len());
    for (row, &m) in attachments.iter().enumerate() {
        // Keep the progress chatter off stdout when stdout carries JSON.
        match format {
            OutputFormat::Text => println!("Computing for m = {m}"),
            OutputFormat::Json => eprintln!("Computing for m = {m}"),
        }

        // Same per-row seed blocks as `correlation_table`, so a CLI run
        // matches the library driver under one seed.
        let block = seed + (row * samples) as u64;
        let agreement = attachment_agreement(nodes, m, samples, block)
            .with_context(|| format!("Failed to sample networks for m = {m}"))?;
        rows.push(TableRow {
            attachments: m,
            agreement,
        });
    }

    let table = CorrelationTable {
        nodes,
        samples,
        rows,
    };
    let rendered = match format {
        OutputFormat::Text => render_table(&table),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&table)?;
            json.push('\n');
            json
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            if matches!(format, OutputFormat::Text) {
                println!();
            }
            print!("{rendered}");
        }
    }

    Ok(())
}

fn cmd_generate(nodes: usize, attachments: usize, seed: u64) -> Result<()> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let network = Network::barabasi_albert(nodes, attachments, &mut rng)
        .context("Failed to generate network")?;

    let degrees = network.degrees();
    let min_degree = degrees.iter().min().copied().unwrap_or(0);
    let max_degree = degrees.iter().max().copied().unwrap_or(0);
    let mean_degree = 2.0 * network.edge_count() as f64 / network.node_count() as f64;
    let lambda_max = dominant_eigenvalue(&network.adjacency_matrix());

    println!("Scale-free network statistics");
    println!("=============================");
    println!("Nodes:       {}", network.node_count());
    println!("Edges:       {}", network.edge_count());
    println!("Min degree:  {min_degree}");
    println!("Max degree:  {max_degree}");
    println!("Mean degree: {mean_degree:.2}");
    println!("λ_max:       {lambda_max:.4}");

    Ok(())
}

fn cmd_katz(nodes: usize, attachments: usize, multiple: f64, top: usize, seed: u64) -> Result<()> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let network = Network::barabasi_albert(nodes, attachments, &mut rng)
        .context("Failed to generate network")?;
    let adjacency = network.adjacency_matrix();

    let lambda_max = dominant_eigenvalue(&adjacency);
    ensure!(lambda_max > 0.0, "dominant eigenvalue is zero");

    let config = KatzConfig {
        alpha: multiple / lambda_max,
        absolute: multiple >= 1.0,
    };
    let scores = katz_centrality(&adjacency, config)
        .with_context(|| format!("Failed to compute Katz centrality at multiple {multiple}"))?;

    let variant = if config.absolute {
        "absolute resolvent"
    } else {
        "standard resolvent"
    };
    println!("λ_max = {lambda_max:.4}, α = {:.6} ({variant})", config.alpha);

    let mut ranking: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!("Top {} nodes by Katz score:", top.min(ranking.len()));
    for (rank, (node, score)) in ranking.iter().take(top).enumerate() {
        println!("  {}. node {node} ({score:.6})", rank + 1);
    }

    Ok(())
}
