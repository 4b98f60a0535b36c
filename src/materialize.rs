/*
    Materialize concrete subgraphs from embeddings.

    Presentation helpers only: the miner's support is always computed
    over pattern-image edges, never induced ones.
*/

use crate::embed::Embedding;
use crate::graph::{DataGraph, Edge};
use crate::pattern::Pattern;
use std::collections::HashSet;

// The concrete (nodes, edges) named by an embedding. With `induced`
// the edges are all graph edges among the image nodes; otherwise they
// follow the pattern's edges.
pub fn subgraph_from_embedding(
    graph: &DataGraph,
    p: &Pattern,
    emb: &Embedding,
    induced: bool,
) -> (Vec<usize>, Vec<Edge>) {
    let mut nodes: Vec<usize> = emb.clone();
    nodes.sort_unstable();
    nodes.dedup();
    let node_set: HashSet<usize> = nodes.iter().copied().collect();

    let mut edges: Vec<Edge> = Vec::new();
    if induced {
        let mut seen: HashSet<(usize, usize, Option<String>)> = HashSet::new();
        for &u in &nodes {
            for (v, lab) in graph.adj(u) {
                if !node_set.contains(v) {
                    continue;
                }
                if graph.directed() {
                    edges.push(Edge { u, v: *v, label: lab.clone() });
                } else {
                    let (a, b) = (u.min(*v), u.max(*v));
                    if seen.insert((a, b, lab.clone())) {
                        edges.push(Edge { u: a, v: b, label: lab.clone() });
                    }
                }
            }
        }
    } else {
        for e in p.edges() {
            edges.push(Edge {
                u: emb[e.u],
                v: emb[e.v],
                label: e.label.clone(),
            });
        }
    }
    (nodes, edges)
}

pub fn materialize_all(
    graph: &DataGraph,
    p: &Pattern,
    embeddings: &[Embedding],
    induced: bool,
) -> Vec<(Vec<usize>, Vec<Edge>)> {
    embeddings
        .iter()
        .map(|emb| subgraph_from_embedding(graph, p, emb, induced))
        .collect()
}

/*
    Unit tests
*/
