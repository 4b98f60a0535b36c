/*
    Random labeled-graph generation for the generator binary.

    Deterministic for a fixed seed; the mining core itself never
    draws randomness.
*/

use crate::graph::Edge;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug)]
pub struct GenParams {
    pub num_nodes: usize,
    pub num_edges: usize,
    // vertex labels are drawn from L0..L{n-1}
    pub vlabel_count: usize,
    // edge labels are drawn from e0..e{n-1}; 0 leaves edges unlabeled
    pub elabel_count: usize,
    pub seed: u64,
}

pub fn random_graph(params: &GenParams) -> (Vec<String>, Vec<Edge>) {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let vlabels: Vec<String> = (0..params.num_nodes)
        .map(|_| format!("L{}", rng.gen_range(0..params.vlabel_count.max(1))))
        .collect();
    let mut edges = Vec::with_capacity(params.num_edges);
    if params.num_nodes >= 2 {
        for _ in 0..params.num_edges {
            let u = rng.gen_range(0..params.num_nodes);
            let mut v = rng.gen_range(0..params.num_nodes);
            while v == u {
                v = rng.gen_range(0..params.num_nodes);
            }
            let label = if params.elabel_count > 0 {
                Some(format!("e{}", rng.gen_range(0..params.elabel_count)))
            } else {
                None
            };
            edges.push(Edge { u, v, label });
        }
    }
    (vlabels, edges)
}

// Render in the .lg text format understood by the loader.
pub fn to_lg_lines(vlabels: &[String], edges: &[Edge]) -> Vec<String> {
    let mut lines = Vec::with_capacity(vlabels.len() + edges.len());
    for (i, lab) in vlabels.iter().enumerate() {
        if lab.is_empty() {
            lines.push(format!("v {}", i));
        } else {
            lines.push(format!("v {} {}", i, lab));
        }
    }
    for e in edges {
        match &e.label {
            Some(l) => lines.push(format!("e {} {} {}", e.u, e.v, l)),
            None => lines.push(format!("e {} {}", e.u, e.v)),
        }
    }
    lines
}

/*
    Unit tests
*/
