//! All-pairs shortest taste distances.
//!
//! Runs Floyd–Warshall over the distance transform of the taste graph and
//! keeps a next-hop matrix so paths can be reconstructed afterwards. Both
//! matrices are flat index-addressed vectors; category names only appear at
//! the API boundary.

use crate::graph::TasteGraph;
use accord_core::similarity_to_distance;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Distance and next-hop matrices for one build of the taste graph.
///
/// Rows and columns are addressed by interned category index. The distance
/// of a category to itself is zero, unreachable pairs are infinite, and the
/// next-hop matrix holds the first step of a shortest path or `None` when
/// there is none.
#[derive(Debug)]
pub struct ShortestPaths {
    /// Category names in matrix index order.
    categories: Vec<String>,

    /// Maps category names back to matrix indexes.
    index: HashMap<String, usize>,

    /// Row-major `n × n` shortest distances.
    dist: Vec<f64>,

    /// Row-major `n × n` first hops for path reconstruction.
    next: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Runs the all-pairs computation over the given graph.
    ///
    /// Distances are derived freshly from the graph's raw weights on every
    /// call; nothing from an earlier build is reused. Cubic in the number
    /// of categories, which stays in the tens to low hundreds here.
    pub fn compute(graph: &TasteGraph) -> Self {
        let categories: Vec<String> = graph.categories().map(str::to_string).collect();
        let n = categories.len();
        let index: HashMap<String, usize> = categories
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        let mut dist = vec![f64::INFINITY; n * n];
        let mut next: Vec<Option<usize>> = vec![None; n * n];

        for i in 0..n {
            dist[i * n + i] = 0.0;
        }

        // Direct edges. Strictly-less so a shorter parallel entry wins and
        // an equal one keeps the earlier hop.
        for edge in graph.graph.edge_references() {
            let i = edge.source().index();
            let j = edge.target().index();
            let d = similarity_to_distance(*edge.weight());

            if d < dist[i * n + j] {
                dist[i * n + j] = d;
                dist[j * n + i] = d;
                next[i * n + j] = Some(j);
                next[j * n + i] = Some(i);
            }
        }

        // Relaxation over every intermediate category.
        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }

                for j in 0..n {
                    let through = d_ik + dist[k * n + j];
                    if through < dist[i * n + j] {
                        dist[i * n + j] = through;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        Self {
            categories,
            index,
            dist,
            next,
        }
    }

    /// Shortest distance between two categories.
    ///
    /// Infinite when either category is unknown or no path exists.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) => self.dist[i * self.categories.len() + j],
            _ => f64::INFINITY,
        }
    }

    /// Ordered category sequence from `start` to `end`, both inclusive.
    ///
    /// A known category to itself is the single-element path, resolved
    /// before the matrix is consulted. Unknown categories and disconnected
    /// pairs give an empty sequence.
    pub fn path(&self, start: &str, end: &str) -> Vec<String> {
        let (s, e) = match (self.index.get(start), self.index.get(end)) {
            (Some(&s), Some(&e)) => (s, e),
            _ => return Vec::new(),
        };

        if s == e {
            return vec![self.categories[s].clone()];
        }

        let n = self.categories.len();
        if self.next[s * n + e].is_none() {
            return Vec::new();
        }

        // The next-hop matrix encodes a shortest-path tree, so this walk
        // terminates.
        let mut path = vec![self.categories[s].clone()];
        let mut current = s;
        while current != e {
            match self.next[current * n + e] {
                Some(hop) => {
                    path.push(self.categories[hop].clone());
                    current = hop;
                }
                None => return Vec::new(),
            }
        }

        path
    }

    /// Category names in matrix index order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_core::{Connection, EdgeList};

    fn graph_of(edges: &[(&str, &str, f64)]) -> TasteGraph {
        let connections = edges
            .iter()
            .map(|&(a, b, w)| Connection::new(a, b, w))
            .collect();
        TasteGraph::from_edge_list(&EdgeList::from_connections(connections)).unwrap()
    }

    #[test]
    fn test_direct_edge_distance() {
        let paths = ShortestPaths::compute(&graph_of(&[("rock", "pop", 8.0)]));

        assert_eq!(paths.distance("rock", "pop"), 2.0);
        assert_eq!(paths.distance("pop", "rock"), 2.0);
    }

    #[test]
    fn test_self_distance_is_zero() {
        let paths = ShortestPaths::compute(&graph_of(&[("rock", "pop", 8.0)]));

        assert_eq!(paths.distance("rock", "rock"), 0.0);
        assert_eq!(paths.distance("pop", "pop"), 0.0);
    }

    #[test]
    fn test_two_hop_distance_and_path() {
        // rock - pop (8), pop - jazz (6), no direct rock - jazz edge.
        let paths = ShortestPaths::compute(&graph_of(&[
            ("rock", "pop", 8.0),
            ("pop", "jazz", 6.0),
        ]));

        assert_eq!(paths.distance("rock", "jazz"), 6.0);
        assert_eq!(paths.path("rock", "jazz"), vec!["rock", "pop", "jazz"]);
        assert_eq!(paths.path("jazz", "rock"), vec!["jazz", "pop", "rock"]);
    }

    #[test]
    fn test_detour_beats_weak_direct_edge() {
        // Direct a - b has distance 9; the detour through c costs 2 + 2.
        let paths = ShortestPaths::compute(&graph_of(&[
            ("a", "b", 1.0),
            ("a", "c", 8.0),
            ("c", "b", 8.0),
        ]));

        assert_eq!(paths.distance("a", "b"), 4.0);
        assert_eq!(paths.path("a", "b"), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_unknown_category() {
        let paths = ShortestPaths::compute(&graph_of(&[("rock", "pop", 8.0)]));

        assert!(paths.distance("nonexistent", "rock").is_infinite());
        assert!(paths.distance("rock", "nonexistent").is_infinite());
        assert!(paths.path("nonexistent", "rock").is_empty());
    }

    #[test]
    fn test_disconnected_components() {
        let paths = ShortestPaths::compute(&graph_of(&[
            ("rock", "pop", 8.0),
            ("techno", "house", 9.0),
        ]));

        assert!(paths.distance("rock", "techno").is_infinite());
        assert!(paths.path("rock", "techno").is_empty());
    }

    #[test]
    fn test_self_path_is_single_element() {
        let paths = ShortestPaths::compute(&graph_of(&[("rock", "pop", 8.0)]));

        assert_eq!(paths.path("rock", "rock"), vec!["rock"]);
    }

    #[test]
    fn test_symmetry_and_triangle_inequality() {
        let paths = ShortestPaths::compute(&graph_of(&[
            ("rock", "pop", 8.0),
            ("pop", "jazz", 6.0),
            ("jazz", "blues", 9.0),
            ("rock", "blues", 7.0),
            ("pop", "blues", 4.0),
        ]));

        let names: Vec<&str> = paths.categories().collect();
        for a in &names {
            for b in &names {
                assert_eq!(paths.distance(a, b), paths.distance(b, a));
                for c in &names {
                    assert!(
                        paths.distance(a, c)
                            <= paths.distance(a, b) + paths.distance(b, c) + 1e-9
                    );
                }
            }
        }
    }
}
