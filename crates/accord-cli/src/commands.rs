//! CLI command implementations.

use accord_core::{CacheConfig, JsonFileSource};
use accord_graph::{BuildReport, ConnectionsCache};
use colored::Colorize;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Builds an enabled cache from an edge-list document.
fn load_cache(file: &Path) -> Result<(ConnectionsCache, BuildReport)> {
    let source = JsonFileSource::new(file);
    let cache = ConnectionsCache::new(CacheConfig::enabled());
    let report = cache.rebuild_from(&source)?;
    Ok((cache, report))
}

/// Build the cache and report its size.
pub fn build(file: &Path) -> Result<()> {
    let (_, report) = load_cache(file)?;

    println!(
        "{} Cached {} pairs ({} categories, {} connections) in {}ms",
        "✓".green(),
        report.cached_pairs.to_string().cyan(),
        report.categories,
        report.connections,
        report.duration_ms
    );

    Ok(())
}

/// Look up the shortest taste distance between two categories.
pub fn distance(file: &Path, category_a: &str, category_b: &str) -> Result<()> {
    let (cache, _) = load_cache(file)?;

    let distance = cache.distance(category_a, category_b);
    if distance.is_infinite() {
        println!(
            "{} and {} are {}",
            category_a.cyan(),
            category_b.cyan(),
            "not connected".yellow()
        );
    } else {
        println!("{} -> {}: distance = {}", category_a.cyan(), category_b.cyan(), distance);
    }

    Ok(())
}

/// Look up the shortest path between two categories.
pub fn path(file: &Path, category_a: &str, category_b: &str) -> Result<()> {
    let (cache, _) = load_cache(file)?;

    let path = cache.path(category_a, category_b);
    if path.is_empty() {
        println!(
            "{} and {} are {}",
            category_a.cyan(),
            category_b.cyan(),
            "not connected".yellow()
        );
        return Ok(());
    }

    println!("{}", path.join(" -> "));

    if let Some(conn) = cache.connection(category_a, category_b) {
        let hops: Vec<String> = conn.weights.iter().map(|w| w.to_string()).collect();
        println!("  {}", format!("hop weights: [{}]", hops.join(", ")).dimmed());
    }

    Ok(())
}

/// Print every computed connection, sorted for stable output.
pub fn dump(file: &Path) -> Result<()> {
    let (cache, _) = load_cache(file)?;
    let table = cache.all_connections();

    let mut categories: Vec<&String> = table.keys().collect();
    categories.sort();

    for a in categories {
        let row = &table[a];
        let mut partners: Vec<&String> = row.keys().collect();
        partners.sort();

        for b in partners {
            let conn = &row[b];
            println!(
                "{} -> {}: distance = {}, path = {}",
                a.cyan(),
                b.cyan(),
                conn.distance,
                conn.path.join(" -> ")
            );
        }
    }

    Ok(())
}

/// Export the connections table to a JSON file.
pub fn export(file: &Path, output: &Path) -> Result<()> {
    let (cache, report) = load_cache(file)?;
    let table = cache.all_connections();

    let export = serde_json::json!({
        "version": "1.0",
        "stats": {
            "categoryCount": report.categories,
            "connectionCount": report.connections,
            "cachedPairs": report.cached_pairs
        },
        "connections": &*table
    });

    fs::write(output, serde_json::to_string_pretty(&export)?)?;
    println!("{} Exported to {}", "✓".green(), output.display());

    Ok(())
}

/// Show catalogue statistics.
pub fn status(file: &Path) -> Result<()> {
    let (cache, report) = load_cache(file)?;
    let table = cache.all_connections();

    let isolated = table.values().filter(|row| row.is_empty()).count();

    println!("Categories:  {}", report.categories.to_string().cyan());
    println!("Connections: {}", report.connections.to_string().cyan());
    println!("Cached pairs: {}", report.cached_pairs.to_string().cyan());
    if isolated > 0 {
        println!(
            "{} {} categories have no connection at all",
            "⚠".yellow(),
            isolated
        );
    }

    Ok(())
}
