//! The published connection bundles.
//!
//! A `ComputedConnection` packages everything a scorer wants for one ordered
//! pair: the shortest distance, the category sequence realizing it, and the
//! raw similarity weight of each hop along the way.

use crate::graph::TasteGraph;
use crate::shortest_path::ShortestPaths;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cached result for one ordered pair of categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedConnection {
    /// Shortest taste distance between the endpoints.
    pub distance: f64,

    /// Categories along the shortest path, endpoints inclusive.
    pub path: Vec<String>,

    /// Raw similarity weight of each consecutive path edge, so
    /// `weights.len() == path.len() - 1`.
    pub weights: Vec<f64>,
}

/// The full queryable cache: category → category → connection.
///
/// Every catalogue category has an outer entry; inner maps exclude the
/// category itself and anything unreachable from it, so an isolated
/// category maps to an empty row.
pub type ConnectionsTable = HashMap<String, HashMap<String, ComputedConnection>>;

/// Combines distances, paths and raw hop weights into the lookup table.
///
/// Hop weights are looked up from the adjacency graph, not derived from the
/// distance matrix, so they are the untransformed input scores.
pub fn build_connections(graph: &TasteGraph, paths: &ShortestPaths) -> ConnectionsTable {
    let mut table = ConnectionsTable::new();

    for a in paths.categories() {
        let row = table.entry(a.to_string()).or_default();

        for b in paths.categories() {
            if a == b {
                continue;
            }

            let distance = paths.distance(a, b);
            if distance.is_infinite() {
                continue;
            }

            let path = paths.path(a, b);
            let weights = path
                .windows(2)
                .map(|hop| {
                    graph
                        .similarity(&hop[0], &hop[1])
                        .expect("consecutive path categories share a direct edge")
                })
                .collect();

            row.insert(
                b.to_string(),
                ComputedConnection {
                    distance,
                    path,
                    weights,
                },
            );
        }
    }

    table
}
