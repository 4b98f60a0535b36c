/*
    Embedding enumeration and support computation.

    An embedding maps every pattern vertex to a distinct graph vertex
    so that labels match and every pattern edge is present (with
    direction for directed patterns). The search is plain backtracking
    over per-vertex domains (graph nodes with the matching label),
    assigning small-domain, high-degree pattern vertices first.

    The backtracking stack is explicit, so pattern depth never
    stresses the host stack. All iteration orders are fixed: domains
    ascend by graph node id and the assignment order breaks ties by
    pattern node id, so repeated runs enumerate identical sequences.
*/

use crate::graph::DataGraph;
use crate::pattern::Pattern;
use std::collections::HashSet;

// Dense map pattern node id -> graph node id.
pub type Embedding = Vec<usize>;

// Constraint on an already-assigned neighbor, from the point of view
// of the vertex being placed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Dir {
    Out,
    In,
}

pub struct Embedder<'g> {
    graph: &'g DataGraph,
}

impl<'g> Embedder<'g> {
    pub fn new(graph: &'g DataGraph) -> Self {
        Self { graph }
    }

    // Every injective embedding of `p`.
    pub fn embeddings(&self, p: &Pattern) -> Vec<Embedding> {
        self.embeddings_capped(p, None).0
    }

    // Like `embeddings`, stopping once `cap` embeddings are found.
    // The second return value is true iff the search stopped early.
    pub fn embeddings_capped(
        &self,
        p: &Pattern,
        cap: Option<usize>,
    ) -> (Vec<Embedding>, bool) {
        let mut out = Vec::new();
        let truncated = self.search(p, |emb| {
            out.push(emb.to_vec());
            cap.map_or(true, |c| out.len() < c)
        });
        (out, truncated)
    }

    // Count of injective embeddings, stopping early at `cap`.
    pub fn support_count(&self, p: &Pattern, cap: Option<usize>) -> usize {
        let mut count = 0usize;
        self.search(p, |_| {
            count += 1;
            cap.map_or(true, |c| count < c)
        });
        count
    }

    // Core backtracking loop with an explicit cursor stack. Calls
    // `on_solution` for each embedding; a false return stops the
    // search. Returns true iff the search was stopped early.
    fn search(
        &self,
        p: &Pattern,
        mut on_solution: impl FnMut(&[usize]) -> bool,
    ) -> bool {
        let k = p.num_nodes();
        if k == 0 {
            // the empty pattern has exactly the empty embedding
            on_solution(&[]);
            return false;
        }

        let domains: Vec<&[usize]> = (0..k)
            .map(|i| self.graph.nodes_with_label(p.vlabel(i)))
            .collect();
        let order = assignment_order(p, &domains);
        let nbrs = neighbor_constraints(p);

        let mut assignment: Vec<Option<usize>> = vec![None; k];
        let mut cursors: Vec<usize> = vec![0];
        loop {
            let depth = cursors.len() - 1;
            let u_p = order[depth];
            let dom = domains[u_p];
            let mut descended = false;
            while cursors[depth] < dom.len() {
                let u_g = dom[cursors[depth]];
                cursors[depth] += 1;
                assignment[u_p] = None;
                if assignment.iter().any(|a| *a == Some(u_g)) {
                    continue;
                }
                if !self.consistent(p, &nbrs, &assignment, u_p, u_g) {
                    continue;
                }
                assignment[u_p] = Some(u_g);
                if depth + 1 == k {
                    let emb: Vec<usize> =
                        assignment.iter().map(|a| a.unwrap()).collect();
                    let keep_going = on_solution(&emb);
                    assignment[u_p] = None;
                    if !keep_going {
                        return true;
                    }
                } else {
                    cursors.push(0);
                    descended = true;
                    break;
                }
            }
            if descended {
                continue;
            }
            assignment[u_p] = None;
            cursors.pop();
            if cursors.is_empty() {
                return false;
            }
        }
    }

    // Label match plus edge preservation against every
    // already-assigned pattern neighbor.
    fn consistent(
        &self,
        p: &Pattern,
        nbrs: &[Vec<(usize, Option<String>, Dir)>],
        assignment: &[Option<usize>],
        u_p: usize,
        u_g: usize,
    ) -> bool {
        if p.vlabel(u_p) != self.graph.vlabel(u_g) {
            return false;
        }
        for (v_p, elab, dir) in &nbrs[u_p] {
            if let Some(v_g) = assignment[*v_p] {
                let ok = match dir {
                    Dir::Out => self.graph.has_edge(u_g, v_g, elab.as_deref()),
                    Dir::In => self.graph.has_edge(v_g, u_g, elab.as_deref()),
                };
                if !ok {
                    return false;
                }
            }
        }
        true
    }
}

// Pattern vertices sorted by (domain size, descending pattern degree,
// id) for early pruning with deterministic ties.
fn assignment_order(p: &Pattern, domains: &[&[usize]]) -> Vec<usize> {
    let k = p.num_nodes();
    let mut deg = vec![0usize; k];
    for e in p.edges() {
        deg[e.u] += 1;
        deg[e.v] += 1;
    }
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by_key(|&u| (domains[u].len(), std::cmp::Reverse(deg[u]), u));
    order
}

// For each pattern vertex, the adjacent (vertex, edge label,
// direction) triples to check when it is placed.
fn neighbor_constraints(p: &Pattern) -> Vec<Vec<(usize, Option<String>, Dir)>> {
    let mut nbrs: Vec<Vec<(usize, Option<String>, Dir)>> =
        vec![Vec::new(); p.num_nodes()];
    for e in p.edges() {
        nbrs[e.u].push((e.v, e.label.clone(), Dir::Out));
        let back = if p.directed() { Dir::In } else { Dir::Out };
        nbrs[e.v].push((e.u, e.label.clone(), back));
    }
    nbrs
}

// Minimum Image-based support: the minimum, over pattern vertices, of
// the number of distinct graph vertices that vertex maps to. Zero for
// the empty pattern. Anti-monotone under pattern extension.
pub fn mni_support(embeddings: &[Embedding], k: usize) -> usize {
    if k == 0 {
        return 0;
    }
    let mut images: Vec<HashSet<usize>> = vec![HashSet::new(); k];
    for emb in embeddings {
        for (i, &g) in emb.iter().enumerate() {
            images[i].insert(g);
        }
    }
    images.iter().map(HashSet::len).min().unwrap()
}

/*
    Unit tests
*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DataGraph, Edge};

    fn labels(labs: &[&str]) -> Vec<String> {
        labs.iter().map(|s| s.to_string()).collect()
    }

    fn k4() -> DataGraph {
        let mut edges = Vec::new();
        for u in 0..4 {
            for v in (u + 1)..4 {
                edges.push(Edge::new(u, v));
            }
        }
        DataGraph::new(false, labels(&["A", "A", "A", "A"]), edges).unwrap()
    }

    fn triangle_pattern() -> Pattern {
        Pattern::new(
            false,
            labels(&["A", "A", "A"]),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
        )
        .unwrap()
    }

    #[test]
    fn test_k4_triangle_counts() {
        let g = k4();
        let embedder = Embedder::new(&g);
        let p = triangle_pattern();
        let embs = embedder.embeddings(&p);
        // ordered triples of distinct clique vertices
        assert_eq!(embs.len(), 24);
        assert_eq!(embedder.support_count(&p, None), 24);
        assert_eq!(mni_support(&embs, 3), 4);
    }

    #[test]
    fn test_embeddings_are_injective_and_edge_preserving() {
        let g = k4();
        let p = triangle_pattern();
        for emb in Embedder::new(&g).embeddings(&p) {
            let distinct: HashSet<usize> = emb.iter().copied().collect();
            assert_eq!(distinct.len(), emb.len());
            for e in p.edges() {
                assert!(g.has_edge(emb[e.u], emb[e.v], e.label.as_deref()));
            }
        }
    }

    #[test]
    fn test_cap_stops_early() {
        let g = k4();
        let embedder = Embedder::new(&g);
        let p = triangle_pattern();
        let (embs, truncated) = embedder.embeddings_capped(&p, Some(5));
        assert_eq!(embs.len(), 5);
        assert!(truncated);
        assert_eq!(embedder.support_count(&p, Some(5)), 5);
        let (_, truncated) = embedder.embeddings_capped(&p, Some(1000));
        assert!(!truncated);
    }

    #[test]
    fn test_directed_edges_respected() {
        let g = DataGraph::new(
            true,
            labels(&["A", "B"]),
            vec![Edge::new(0, 1)],
        )
        .unwrap();
        let embedder = Embedder::new(&g);
        let fwd =
            Pattern::new(true, labels(&["A", "B"]), vec![Edge::new(0, 1)])
                .unwrap();
        let bck =
            Pattern::new(true, labels(&["A", "B"]), vec![Edge::new(1, 0)])
                .unwrap();
        assert_eq!(embedder.embeddings(&fwd), vec![vec![0, 1]]);
        assert!(embedder.embeddings(&bck).is_empty());
    }

    #[test]
    fn test_edge_label_constrains_match() {
        let g = DataGraph::new(
            false,
            labels(&["A", "B"]),
            vec![Edge::labeled(0, 1, "x")],
        )
        .unwrap();
        let embedder = Embedder::new(&g);
        let with_x = Pattern::new(
            false,
            labels(&["A", "B"]),
            vec![Edge::labeled(0, 1, "x")],
        )
        .unwrap();
        let with_y = Pattern::new(
            false,
            labels(&["A", "B"]),
            vec![Edge::labeled(0, 1, "y")],
        )
        .unwrap();
        let unlabeled =
            Pattern::new(false, labels(&["A", "B"]), vec![Edge::new(0, 1)])
                .unwrap();
        assert_eq!(embedder.embeddings(&with_x).len(), 1);
        assert!(embedder.embeddings(&with_y).is_empty());
        // an unlabeled pattern edge matches any stored label
        assert_eq!(embedder.embeddings(&unlabeled).len(), 1);
    }

    #[test]
    fn test_mni_empty() {
        assert_eq!(mni_support(&[], 0), 0);
        assert_eq!(mni_support(&[], 2), 0);
    }
}
