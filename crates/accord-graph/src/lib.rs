//! Accord Graph - compatibility-distance precomputation
//!
//! This crate turns a weighted undirected edge list over taste categories
//! into a precomputed lookup table: for any two categories, the shortest
//! "taste distance", the category path realizing it, and the raw similarity
//! weight of every hop, all retrievable in constant time.
//!
//! # Architecture
//!
//! The build runs strictly left to right:
//! - `TasteGraph` interns categories and stores the symmetric adjacency
//! - `ShortestPaths` runs Floyd–Warshall over the distance transform and
//!   keeps a next-hop matrix for path reconstruction
//! - `build_connections` combines distances, paths and raw hop weights
//! - `ConnectionsCache` gates the build behind its configuration switch and
//!   publishes the finished table with a single reference swap
//!
//! # Example
//!
//! ```
//! use accord_core::{CacheConfig, Connection, EdgeList};
//! use accord_graph::ConnectionsCache;
//!
//! let cache = ConnectionsCache::new(CacheConfig::enabled());
//! let list = EdgeList::from_connections(vec![
//!     Connection::new("rock", "pop", 8.0),
//!     Connection::new("pop", "jazz", 6.0),
//! ]);
//! cache.rebuild(&list)?;
//!
//! assert_eq!(cache.distance("rock", "jazz"), 6.0);
//! assert_eq!(cache.path("rock", "jazz"), vec!["rock", "pop", "jazz"]);
//! # Ok::<(), accord_graph::BuildError>(())
//! ```

mod cache;
mod connections;
mod error;
mod graph;
mod shortest_path;

pub use cache::{BuildReport, ConnectionsCache};
pub use connections::{build_connections, ComputedConnection, ConnectionsTable};
pub use error::BuildError;
pub use graph::{CategoryId, TasteGraph};
pub use shortest_path::ShortestPaths;
