//! Accord CLI - Command-line interface for Accord
//!
//! This is the inspection surface for the connections cache. It builds the
//! cache from an edge-list document and answers distance and path queries,
//! dumps every computed connection, or exports the table as JSON.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "accord")]
#[command(author = "Accord Contributors")]
#[command(version)]
#[command(about = "Taste-compatibility distances over a category graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the connections cache and report its size
    Build {
        /// Edge-list JSON document
        file: PathBuf,
    },

    /// Look up the shortest taste distance between two categories
    Distance {
        /// Edge-list JSON document
        file: PathBuf,

        /// Start category
        category_a: String,

        /// End category
        category_b: String,
    },

    /// Look up the shortest path between two categories
    Path {
        /// Edge-list JSON document
        file: PathBuf,

        /// Start category
        category_a: String,

        /// End category
        category_b: String,
    },

    /// Print every computed connection
    Dump {
        /// Edge-list JSON document
        file: PathBuf,
    },

    /// Export the connections table to JSON
    Export {
        /// Edge-list JSON document
        file: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "accord-connections.json")]
        output: PathBuf,
    },

    /// Show catalogue statistics
    Status {
        /// Edge-list JSON document
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Build { file } => commands::build(&file),
        Commands::Distance {
            file,
            category_a,
            category_b,
        } => commands::distance(&file, &category_a, &category_b),
        Commands::Path {
            file,
            category_a,
            category_b,
        } => commands::path(&file, &category_a, &category_b),
        Commands::Dump { file } => commands::dump(&file),
        Commands::Export { file, output } => commands::export(&file, &output),
        Commands::Status { file } => commands::status(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
