/*
    Patterns: small vertex- and edge-labeled graphs, the unit of
    mining output.

    A pattern is immutable after construction and carries its
    canonical key, computed once. Two patterns are the same pattern
    iff their keys are equal; node numbering and edge order do not
    matter.

    Pattern::new is the checked constructor for caller-supplied data
    (endpoint range and connectivity are validated). The candidate
    generator builds patterns whose invariants hold by construction
    and uses the unchecked constructor, which only debug-asserts.
*/

use crate::canonical::{canonical_key, CanonicalKey};
use crate::errors::Error;
use crate::graph::Edge;
use disjoint_sets::UnionFind;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct Pattern {
    directed: bool,
    vlabels: Vec<String>,
    edges: Vec<Edge>,
    key: CanonicalKey,
}

impl Pattern {
    // Checked constructor: every edge endpoint must be in range and
    // the edges must connect all pattern vertices.
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
        if !connected(n, &edges) {
            return Err(Error::DisconnectedPattern);
        }
        Ok(Self::new_unchecked(directed, vlabels, edges))
    }

    // Construction-time invariants assumed (seeds have one edge,
    // extensions attach to an existing vertex).
    pub(crate) fn new_unchecked(
        directed: bool,
        vlabels: Vec<String>,
        edges: Vec<Edge>,
    ) -> Self {
        debug_assert!(edges
            .iter()
            .all(|e| e.u < vlabels.len() && e.v < vlabels.len()));
        debug_assert!(connected(vlabels.len(), &edges));
        let key = canonical_key(directed, &vlabels, &edges);
        Self { directed, vlabels, edges, key }
    }

    /*
        Accessors
    */

    pub fn directed(&self) -> bool {
        self.directed
    }
    pub fn num_nodes(&self) -> usize {
        self.vlabels.len()
    }
    pub fn vlabel(&self, i: usize) -> &str {
        &self.vlabels[i]
    }
    pub fn vlabels(&self) -> &[String] {
        &self.vlabels
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    // Number of pattern edges incident to vertex i.
    pub fn degree(&self, i: usize) -> usize {
        self.edges.iter().filter(|e| e.u == i || e.v == i).count()
    }

    // Edge identities for membership checks; undirected edges are
    // normalized to (min, max).
    pub fn edge_set(&self) -> HashSet<(usize, usize, Option<&str>)> {
        self.edges
            .iter()
            .map(|e| {
                if self.directed {
                    (e.u, e.v, e.label.as_deref())
                } else {
                    (e.u.min(e.v), e.u.max(e.v), e.label.as_deref())
                }
            })
            .collect()
    }

    /*
        Derived patterns (used by the candidate generator)
    */

    // The same vertices plus one more edge between existing vertices.
    pub(crate) fn with_edge(&self, e: Edge) -> Self {
        let mut edges = self.edges.clone();
        edges.push(e);
        Self::new_unchecked(self.directed, self.vlabels.clone(), edges)
    }

    // One new vertex attached by one new edge; the edge must
    // reference the new vertex id `self.num_nodes()`.
    pub(crate) fn with_new_vertex(&self, vlabel: &str, e: Edge) -> Self {
        debug_assert!(e.u == self.num_nodes() || e.v == self.num_nodes());
        let mut vlabels = self.vlabels.clone();
        vlabels.push(vlabel.to_string());
        let mut edges = self.edges.clone();
        edges.push(e);
        Self::new_unchecked(self.directed, vlabels, edges)
    }
}

// Whether the undirected graph underlying `edges` connects all of
// 0..n. Vacuously true for n <= 1.
fn connected(n: usize, edges: &[Edge]) -> bool {
    if n <= 1 {
        return true;
    }
    let mut uf = UnionFind::new(n);
    for e in edges {
        uf.union(e.u, e.v);
    }
    let root = uf.find(0);
    (1..n).all(|i| uf.find(i) == root)
}

/*
    Unit tests
*/
