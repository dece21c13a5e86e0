//! The taste category graph.
//!
//! `TasteGraph` wraps an undirected petgraph and an id index so every
//! category name is interned exactly once and addressed by index in the
//! matrices downstream.

use crate::error::BuildError;
use accord_core::{Connection, EdgeList, MAX_WEIGHT};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use tracing::debug;

/// Unique identifier for an interned category.
pub type CategoryId = NodeIndex;

/// The weighted undirected graph of taste categories.
///
/// Node weights are category names; edge weights are the raw similarity
/// scores from the input document. Symmetry is structural: the graph is
/// undirected, so one stored edge serves both directions.
#[derive(Debug)]
pub struct TasteGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: UnGraph<String, f64>,

    /// Maps category names to graph node indexes.
    id_index: HashMap<String, CategoryId>,
}

impl Default for TasteGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TasteGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            id_index: HashMap::new(),
        }
    }

    /// Builds the graph from an input document.
    ///
    /// Standalone categories are interned first, then every connection is
    /// applied in document order. Each weight must lie within
    /// `[0, MAX_WEIGHT]`; a violation rejects the whole document. When the
    /// same unordered pair appears more than once, the later weight wins.
    /// An empty document yields an empty graph, which is a valid terminal
    /// state, not an error.
    pub fn from_edge_list(list: &EdgeList) -> Result<Self, BuildError> {
        let mut graph = Self::new();

        for name in &list.categories {
            graph.intern(name);
        }

        for conn in &list.connections {
            graph.add_connection(conn)?;
        }

        Ok(graph)
    }

    /// Interns a category name, returning its index.
    ///
    /// Interning order is insertion order, so matrix indexes follow the
    /// input document.
    pub fn intern(&mut self, name: &str) -> CategoryId {
        if let Some(&index) = self.id_index.get(name) {
            return index;
        }

        let index = self.graph.add_node(name.to_string());
        self.id_index.insert(name.to_string(), index);
        index
    }

    /// Adds one undirected connection, replacing the weight of an existing
    /// edge between the same pair (last write wins).
    ///
    /// Self-edges are dropped: a category is at distance zero from itself
    /// by definition, and a self-loop can never lie on a shortest path. The
    /// category itself is still interned into the catalogue.
    pub fn add_connection(&mut self, conn: &Connection) -> Result<(), BuildError> {
        if !(0.0..=MAX_WEIGHT).contains(&conn.weight) {
            return Err(BuildError::WeightOutOfRange {
                category_a: conn.category_a.clone(),
                category_b: conn.category_b.clone(),
                weight: conn.weight,
            });
        }

        if conn.category_a == conn.category_b {
            debug!(category = %conn.category_a, "dropping self-edge");
            self.intern(&conn.category_a);
            return Ok(());
        }

        let a = self.intern(&conn.category_a);
        let b = self.intern(&conn.category_b);
        self.graph.update_edge(a, b, conn.weight);

        Ok(())
    }

    /// Raw similarity weight of the direct edge between two categories.
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let edge = self.graph.find_edge(ia, ib)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Whether a category is part of the catalogue.
    pub fn contains(&self, name: &str) -> bool {
        self.id_index.contains_key(name)
    }

    /// The interned index for a category name.
    pub fn index_of(&self, name: &str) -> Option<CategoryId> {
        self.id_index.get(name).copied()
    }

    /// Iterates category names in interning order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Returns the number of categories.
    pub fn category_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of direct connections.
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: &str, b: &str, w: f64) -> Connection {
        Connection::new(a, b, w)
    }

    #[test]
    fn test_empty_list_builds_empty_graph() {
        let graph = TasteGraph::from_edge_list(&EdgeList::default()).unwrap();

        assert_eq!(graph.category_count(), 0);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let list = EdgeList::from_connections(vec![edge("rock", "pop", 8.0)]);
        let graph = TasteGraph::from_edge_list(&list).unwrap();

        assert_eq!(graph.similarity("rock", "pop"), Some(8.0));
        assert_eq!(graph.similarity("pop", "rock"), Some(8.0));
        assert_eq!(graph.similarity("rock", "jazz"), None);
    }

    #[test]
    fn test_duplicate_pair_last_write_wins() {
        let list = EdgeList::from_connections(vec![
            edge("rock", "pop", 3.0),
            edge("pop", "rock", 8.0),
        ]);
        let graph = TasteGraph::from_edge_list(&list).unwrap();

        assert_eq!(graph.connection_count(), 1);
        assert_eq!(graph.similarity("rock", "pop"), Some(8.0));
    }

    #[test]
    fn test_weight_out_of_range_rejected() {
        for bad in [-1.0, 10.5, f64::NAN] {
            let list = EdgeList::from_connections(vec![edge("rock", "pop", bad)]);
            let err = TasteGraph::from_edge_list(&list).unwrap_err();
            assert!(matches!(err, BuildError::WeightOutOfRange { .. }));
        }
    }

    #[test]
    fn test_self_edge_dropped_but_category_kept() {
        let list = EdgeList::from_connections(vec![edge("rock", "rock", 5.0)]);
        let graph = TasteGraph::from_edge_list(&list).unwrap();

        assert!(graph.contains("rock"));
        assert_eq!(graph.connection_count(), 0);
        assert_eq!(graph.similarity("rock", "rock"), None);
    }

    #[test]
    fn test_standalone_categories_interned() {
        let list = EdgeList {
            categories: vec!["ambient".to_string()],
            connections: vec![edge("rock", "pop", 8.0)],
        };
        let graph = TasteGraph::from_edge_list(&list).unwrap();

        assert!(graph.contains("ambient"));
        assert_eq!(graph.category_count(), 3);

        // Standalone categories come first in interning order.
        let names: Vec<&str> = graph.categories().collect();
        assert_eq!(names, vec!["ambient", "rock", "pop"]);
    }
}
