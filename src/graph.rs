/*
    The input data graph: immutable, vertex- and edge-labeled,
    directed or undirected.

    Supports:
    - Forward adjacency `adj` and reverse adjacency `rev`, both
      preserving edge insertion order (required for deterministic
      neighbor iteration). For undirected graphs every edge is stored
      in both directions, so the two structures coincide.
    - Label -> node index for computing embedding domains.
    - Edge existence and edge-label lookup between a node pair.
    - An edge-type histogram used for seed selection and frequency
      pruning.

    The graph is constructed once, validated, and then only read;
    it is shared by reference across the mining components and any
    parallel workers.
*/

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/*
    Edges
*/

// An edge of the data graph (or of a pattern, over pattern node ids).
// `label` is optional; None is distinct from Some("").
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub label: Option<String>,
}
impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v, label: None }
    }
    pub fn labeled(u: usize, v: usize, label: &str) -> Self {
        Self { u, v, label: Some(label.to_string()) }
    }
}

// The labels-only shape of an edge: source label, target label,
// optional edge label, directedness. For undirected edges the two
// vertex labels are normalized so that src_label <= dst_label.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeType {
    pub src_label: String,
    pub dst_label: String,
    pub elabel: Option<String>,
    pub directed: bool,
}
impl EdgeType {
    pub fn of(
        lu: &str,
        lv: &str,
        elabel: Option<&str>,
        directed: bool,
    ) -> Self {
        let (a, b) = if directed || lu <= lv { (lu, lv) } else { (lv, lu) };
        Self {
            src_label: a.to_string(),
            dst_label: b.to_string(),
            elabel: elabel.map(String::from),
            directed,
        }
    }
}

/*
    DataGraph
*/

#[derive(Clone, Debug)]
pub struct DataGraph {
    directed: bool,
    vlabels: Vec<String>,
    adj: Vec<Vec<(usize, Option<String>)>>,
    rev: Vec<Vec<(usize, Option<String>)>>,
    // neighbor -> labels of the stored forward edges to it, in
    // insertion order
    adj_labels: Vec<HashMap<usize, Vec<Option<String>>>>,
    lab2nodes: HashMap<String, Vec<usize>>,
    num_edges: usize,
}

impl DataGraph {
    // Validates that every edge endpoint names a declared vertex;
    // fails fast with no partial graph otherwise.
    pub fn new(
        directed: bool,
        vlabels: Vec<String>,
        edges: Vec<Edge>,
    ) -> Result<Self, Error> {
        let n = vlabels.len();
        for e in &edges {
            if e.u >= n || e.v >= n {
                return Err(Error::EdgeOutOfRange {
                    u: e.u,
                    v: e.v,
                    num_nodes: n,
                });
            }
        }

        let mut adj: Vec<Vec<(usize, Option<String>)>> = vec![Vec::new(); n];
        let mut rev: Vec<Vec<(usize, Option<String>)>> = vec![Vec::new(); n];
        let mut adj_labels: Vec<HashMap<usize, Vec<Option<String>>>> =
            vec![HashMap::new(); n];
        let num_edges = edges.len();
        for e in edges {
            adj[e.u].push((e.v, e.label.clone()));
            rev[e.v].push((e.u, e.label.clone()));
            adj_labels[e.u].entry(e.v).or_default().push(e.label.clone());
            if !directed {
                adj[e.v].push((e.u, e.label.clone()));
                rev[e.u].push((e.v, e.label.clone()));
                adj_labels[e.v].entry(e.u).or_default().push(e.label);
            }
        }

        let mut lab2nodes: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, lab) in vlabels.iter().enumerate() {
            // node ids arrive in ascending order, so each list is sorted
            lab2nodes.entry(lab.clone()).or_default().push(i);
        }

        Ok(Self { directed, vlabels, adj, rev, adj_labels, lab2nodes, num_edges })
    }

    /*
        Exposed API
    */

    pub fn directed(&self) -> bool {
        self.directed
    }
    pub fn num_nodes(&self) -> usize {
        self.vlabels.len()
    }
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
    pub fn vlabel(&self, u: usize) -> &str {
        &self.vlabels[u]
    }
    pub fn vlabels(&self) -> &[String] {
        &self.vlabels
    }
    pub fn adj(&self, u: usize) -> &[(usize, Option<String>)] {
        &self.adj[u]
    }
    pub fn rev(&self, u: usize) -> &[(usize, Option<String>)] {
        &self.rev[u]
    }
    pub fn degree(&self, u: usize) -> usize {
        self.adj[u].len()
    }

    // Node ids carrying the given label, in ascending order.
    pub fn nodes_with_label(&self, lab: &str) -> &[usize] {
        self.lab2nodes.get(lab).map(Vec::as_slice).unwrap_or(&[])
    }

    // True iff some stored forward edge u -> v matches `label`
    // (None matches any label).
    pub fn has_edge(&self, u: usize, v: usize, label: Option<&str>) -> bool {
        match self.adj_labels[u].get(&v) {
            None => false,
            Some(labs) => match label {
                None => true,
                Some(l) => labs.iter().any(|x| x.as_deref() == Some(l)),
            },
        }
    }

    // Labels of the stored forward edges u -> v, in insertion order.
    pub fn edge_labels_between(
        &self,
        u: usize,
        v: usize,
    ) -> &[Option<String>] {
        self.adj_labels[u].get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    // Occurrence count per edge type. Directed graphs count each
    // stored forward edge once; undirected graphs count each edge
    // once via the u < v guard, with vertex labels normalized.
    pub fn edge_type_counts(&self) -> BTreeMap<EdgeType, usize> {
        let mut counts: BTreeMap<EdgeType, usize> = BTreeMap::new();
        for u in 0..self.vlabels.len() {
            let lu = &self.vlabels[u];
            for (v, el) in &self.adj[u] {
                if !self.directed && u > *v {
                    continue;
                }
                let lv = &self.vlabels[*v];
                let ty = EdgeType::of(lu, lv, el.as_deref(), self.directed);
                *counts.entry(ty).or_insert(0) += 1;
            }
        }
        counts
    }
}

/*
    Unit tests
*/
#[cfg(test)]
mod tests {
    use super::*;

    fn labels(labs: &[&str]) -> Vec<String> {
        labs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_undirected_symmetry() {
        let g = DataGraph::new(
            false,
            labels(&["A", "B"]),
            vec![Edge::labeled(0, 1, "x")],
        )
        .unwrap();
        assert!(g.has_edge(0, 1, None));
        assert!(g.has_edge(1, 0, None));
        assert!(g.has_edge(0, 1, Some("x")));
        assert!(!g.has_edge(0, 1, Some("y")));
        assert_eq!(g.adj(0), g.rev(0));
        assert_eq!(g.adj(1), g.rev(1));
    }

    #[test]
    fn test_directed_asymmetry() {
        let g = DataGraph::new(
            true,
            labels(&["A", "B"]),
            vec![Edge::new(0, 1)],
        )
        .unwrap();
        assert!(g.has_edge(0, 1, None));
        assert!(!g.has_edge(1, 0, None));
        assert_eq!(g.rev(1), &[(0, None)]);
    }

    #[test]
    fn test_label_distinct_from_empty() {
        let g = DataGraph::new(
            false,
            labels(&["A", "B"]),
            vec![Edge::labeled(0, 1, "")],
        )
        .unwrap();
        assert!(g.has_edge(0, 1, Some("")));
        assert!(!g.has_edge(0, 1, Some("x")));
    }

    #[test]
    fn test_edge_out_of_range() {
        let res =
            DataGraph::new(false, labels(&["A"]), vec![Edge::new(0, 1)]);
        assert!(matches!(res, Err(Error::EdgeOutOfRange { .. })));
        // an empty vertex set with edges is the same violation
        let res = DataGraph::new(false, Vec::new(), vec![Edge::new(0, 0)]);
        assert!(matches!(res, Err(Error::EdgeOutOfRange { .. })));
    }

    #[test]
    fn test_edge_type_counts_undirected() {
        // B-A and A-B normalize to the same type
        let g = DataGraph::new(
            false,
            labels(&["B", "A", "B"]),
            vec![Edge::new(0, 1), Edge::new(1, 2)],
        )
        .unwrap();
        let counts = g.edge_type_counts();
        assert_eq!(counts.len(), 1);
        let ty = EdgeType::of("A", "B", None, false);
        assert_eq!(counts[&ty], 2);
    }

    #[test]
    fn test_edge_type_counts_directed() {
        let g = DataGraph::new(
            true,
            labels(&["A", "B"]),
            vec![Edge::new(0, 1), Edge::new(1, 0)],
        )
        .unwrap();
        let counts = g.edge_type_counts();
        assert_eq!(counts[&EdgeType::of("A", "B", None, true)], 1);
        assert_eq!(counts[&EdgeType::of("B", "A", None, true)], 1);
    }

    #[test]
    fn test_parallel_edges() {
        let g = DataGraph::new(
            false,
            labels(&["A", "B"]),
            vec![Edge::labeled(0, 1, "x"), Edge::labeled(0, 1, "y")],
        )
        .unwrap();
        assert_eq!(g.edge_labels_between(0, 1).len(), 2);
        assert!(g.has_edge(0, 1, Some("x")));
        assert!(g.has_edge(0, 1, Some("y")));
        assert_eq!(g.edge_type_counts().len(), 2);
    }
}
