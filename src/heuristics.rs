/*
    Search-ordering heuristics for the pre-filtered miner.

    Rare vertex labels are explored first and high-degree neighbors
    are preferred within a label class; a candidate neighbor is
    dropped when its graph degree cannot accommodate the pattern
    degree it would need. These change search order and admissibility
    of partial steps only, never the support of a pattern.
*/

use crate::graph::DataGraph;
use std::cmp::Reverse;
use std::collections::HashMap;

pub struct Heuristics<'g> {
    graph: &'g DataGraph,
    lab_freq: HashMap<String, usize>,
    deg: Vec<usize>,
}

impl<'g> Heuristics<'g> {
    pub fn new(graph: &'g DataGraph) -> Self {
        let mut lab_freq: HashMap<String, usize> = HashMap::new();
        for lab in graph.vlabels() {
            *lab_freq.entry(lab.clone()).or_insert(0) += 1;
        }
        let deg = (0..graph.num_nodes()).map(|u| graph.degree(u)).collect();
        Self { graph, lab_freq, deg }
    }

    // Number of graph vertices carrying the label.
    pub fn label_rarity(&self, lab: &str) -> usize {
        self.lab_freq.get(lab).copied().unwrap_or(0)
    }

    // Forward neighbors of u, rarest label first, then highest degree.
    pub fn neighbor_order(&self, u: usize) -> Vec<(usize, Option<String>)> {
        let mut neigh: Vec<(usize, Option<String>)> =
            self.graph.adj(u).to_vec();
        neigh.sort_by_key(|(v, _)| {
            (self.label_rarity(self.graph.vlabel(*v)), Reverse(self.deg[*v]))
        });
        neigh
    }

    // As `neighbor_order` but over incoming edges (directed graphs).
    pub fn in_neighbor_order(&self, u: usize) -> Vec<(usize, Option<String>)> {
        let mut neigh: Vec<(usize, Option<String>)> =
            self.graph.rev(u).to_vec();
        neigh.sort_by_key(|(v, _)| {
            (self.label_rarity(self.graph.vlabel(*v)), Reverse(self.deg[*v]))
        });
        neigh
    }

    // A candidate graph vertex must carry at least the degree the
    // pattern vertex will need after the extension.
    pub fn degree_prune(&self, need: usize, have: usize) -> bool {
        have >= need
    }
}

/*
    Unit tests
*/
