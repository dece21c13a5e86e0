//! The connections cache and its rebuild lifecycle.
//!
//! The cache owns the only mutation point in the crate: a wholesale rebuild
//! that constructs the graph, the matrices and the table off to the side,
//! then publishes the finished table with a single reference swap. Readers
//! hold cheap `Arc` handles and can never observe a partially built table.

use crate::connections::{build_connections, ComputedConnection, ConnectionsTable};
use crate::error::BuildError;
use crate::graph::TasteGraph;
use crate::shortest_path::ShortestPaths;
use accord_core::{CacheConfig, EdgeList, EdgeSource};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::{info, warn};

/// Outcome of one rebuild request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Categories in the catalogue.
    pub categories: usize,

    /// Direct connections in the graph.
    pub connections: usize,

    /// Ordered reachable pairs cached in the table.
    pub cached_pairs: usize,

    /// Build wall time in milliseconds.
    pub duration_ms: u64,

    /// Whether the rebuild was skipped because precomputation is disabled.
    pub skipped: bool,
}

impl BuildReport {
    fn skipped() -> Self {
        Self {
            categories: 0,
            connections: 0,
            cached_pairs: 0,
            duration_ms: 0,
            skipped: true,
        }
    }
}

/// Precomputed compatibility cache over one taste graph.
///
/// Constructed once with its configuration. When precomputation is disabled
/// the cache stays permanently empty and every lookup reports
/// "disconnected"; when enabled, `rebuild` replaces the whole table
/// atomically. Lookups are pure reads against the last published table and
/// never panic.
#[derive(Debug)]
pub struct ConnectionsCache {
    config: CacheConfig,
    table: RwLock<Arc<ConnectionsTable>>,
}

impl ConnectionsCache {
    /// Creates an empty cache. Nothing is computed until `rebuild`.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            table: RwLock::new(Arc::new(ConnectionsTable::new())),
        }
    }

    /// Whether precomputation is enabled for this cache.
    pub fn is_enabled(&self) -> bool {
        self.config.precompute
    }

    /// Loads the edge list from `source` and rebuilds the cache.
    ///
    /// On any failure the previously published table stays in place.
    pub fn rebuild_from(&self, source: &dyn EdgeSource) -> Result<BuildReport, BuildError> {
        if !self.config.precompute {
            info!("precomputation disabled, connections cache stays empty");
            return Ok(BuildReport::skipped());
        }

        let list = match source.load() {
            Ok(list) => list,
            Err(err) => {
                warn!(error = %err, "edge source failed, keeping previous connections table");
                return Err(err.into());
            }
        };

        self.rebuild(&list)
    }

    /// Rebuilds the cache from an in-memory edge list.
    ///
    /// The table is constructed completely before it becomes visible, so
    /// concurrent readers see either the old table or the new one, never a
    /// mix. On failure the previous table stays published.
    pub fn rebuild(&self, list: &EdgeList) -> Result<BuildReport, BuildError> {
        if !self.config.precompute {
            info!("precomputation disabled, connections cache stays empty");
            return Ok(BuildReport::skipped());
        }

        let started = Instant::now();

        let graph = match TasteGraph::from_edge_list(list) {
            Ok(graph) => graph,
            Err(err) => {
                warn!(error = %err, "rebuild failed, keeping previous connections table");
                return Err(err);
            }
        };

        let paths = ShortestPaths::compute(&graph);
        let connections = build_connections(&graph, &paths);

        let report = BuildReport {
            categories: graph.category_count(),
            connections: graph.connection_count(),
            cached_pairs: connections.values().map(|row| row.len()).sum(),
            duration_ms: started.elapsed().as_millis() as u64,
            skipped: false,
        };

        // The one mutation point: swap in the finished table.
        *self
            .table
            .write()
            .unwrap_or_else(|err| err.into_inner()) = Arc::new(connections);

        info!(
            categories = report.categories,
            connections = report.connections,
            cached_pairs = report.cached_pairs,
            duration_ms = report.duration_ms,
            "connections cache rebuilt"
        );

        Ok(report)
    }

    /// Shortest taste distance between two categories.
    ///
    /// Zero for a known category to itself; infinite when either category
    /// is unknown or no path exists.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        let table = self.snapshot();
        match table.get(a) {
            Some(_) if a == b => 0.0,
            Some(row) => row.get(b).map_or(f64::INFINITY, |conn| conn.distance),
            None => f64::INFINITY,
        }
    }

    /// Shortest path between two categories, endpoints inclusive.
    ///
    /// A known category to itself is the single-element path; unknown or
    /// disconnected pairs give an empty sequence.
    pub fn path(&self, a: &str, b: &str) -> Vec<String> {
        let table = self.snapshot();
        match table.get(a) {
            Some(_) if a == b => vec![a.to_string()],
            Some(row) => row.get(b).map_or_else(Vec::new, |conn| conn.path.clone()),
            None => Vec::new(),
        }
    }

    /// Full connection bundle for an ordered pair, if cached.
    pub fn connection(&self, a: &str, b: &str) -> Option<ComputedConnection> {
        self.snapshot().get(a)?.get(b).cloned()
    }

    /// Handle to the full published table for bulk consumption.
    pub fn all_connections(&self) -> Arc<ConnectionsTable> {
        self.snapshot()
    }

    fn snapshot(&self) -> Arc<ConnectionsTable> {
        Arc::clone(&self.table.read().unwrap_or_else(|err| err.into_inner()))
    }
}
