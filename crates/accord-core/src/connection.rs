//! Raw edge-list types for the taste catalogue.
//!
//! A `Connection` is one weighted undirected edge between two categories,
//! exactly as it appears in the input document. Weights measure similarity;
//! distances are derived from them, never stored.

use serde::{Deserialize, Serialize};

/// Upper bound of the similarity scale.
///
/// A direct edge at this weight has distance zero.
pub const MAX_WEIGHT: f64 = 10.0;

/// Converts a raw similarity weight into a path distance.
///
/// Higher similarity means lower distance: a weight of 10 (most similar)
/// maps to distance 0.
pub fn similarity_to_distance(weight: f64) -> f64 {
    MAX_WEIGHT - weight
}

/// One undirected edge of the taste graph.
///
/// `(A, B, w)` and `(B, A, w)` describe the same edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// First endpoint category.
    pub category_a: String,

    /// Second endpoint category.
    pub category_b: String,

    /// Raw similarity weight, expected within `[0, MAX_WEIGHT]`.
    pub weight: f64,
}

impl Connection {
    /// Creates a connection between two categories.
    pub fn new(
        category_a: impl Into<String>,
        category_b: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            category_a: category_a.into(),
            category_b: category_b.into(),
            weight,
        }
    }
}

/// The full input document for one cache build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeList {
    /// Categories that belong to the catalogue even without any edge.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Weighted undirected edges between categories.
    pub connections: Vec<Connection>,
}

impl EdgeList {
    /// Wraps a plain list of connections with no standalone categories.
    pub fn from_connections(connections: Vec<Connection>) -> Self {
        Self {
            categories: Vec::new(),
            connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_to_distance() {
        assert_eq!(similarity_to_distance(10.0), 0.0);
        assert_eq!(similarity_to_distance(8.0), 2.0);
        assert_eq!(similarity_to_distance(0.0), MAX_WEIGHT);
    }

    #[test]
    fn test_parse_document() {
        let doc = r#"{
            "connections": [
                { "categoryA": "rock", "categoryB": "pop", "weight": 8 }
            ]
        }"#;

        let list: EdgeList = serde_json::from_str(doc).unwrap();

        assert!(list.categories.is_empty());
        assert_eq!(
            list.connections,
            vec![Connection::new("rock", "pop", 8.0)]
        );
    }

    #[test]
    fn test_parse_document_with_standalone_categories() {
        let doc = r#"{
            "categories": ["ambient"],
            "connections": []
        }"#;

        let list: EdgeList = serde_json::from_str(doc).unwrap();

        assert_eq!(list.categories, vec!["ambient".to_string()]);
        assert!(list.connections.is_empty());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let list = EdgeList::from_connections(vec![Connection::new("rock", "pop", 8.0)]);
        let json = serde_json::to_string(&list).unwrap();

        assert!(json.contains("categoryA"));
        assert!(json.contains("categoryB"));
        assert!(!json.contains("category_a"));
    }
}
