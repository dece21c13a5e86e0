//! Accord Core - Taste catalogue input types
//!
//! This crate defines the raw material of the Accord engine: the weighted
//! undirected connections between taste categories, the document they arrive
//! in, and the sources that supply that document. The engine itself lives in
//! `accord-graph`; everything here is plain data plus the boundary traits
//! that keep file formats out of the graph code.
//!
//! # Example
//!
//! ```
//! use accord_core::{Connection, EdgeList};
//!
//! let list = EdgeList::from_connections(vec![
//!     Connection::new("rock", "pop", 8.0),
//! ]);
//!
//! assert_eq!(list.connections.len(), 1);
//! ```

mod config;
mod connection;
mod error;
mod source;

pub use config::CacheConfig;
pub use connection::{similarity_to_distance, Connection, EdgeList, MAX_WEIGHT};
pub use error::SourceError;
pub use source::{EdgeSource, JsonFileSource, StaticSource};
