/*
    Candidate generation: seed patterns and one-edge extensions.

    Seeds are the two-node one-edge patterns covering every distinct
    edge type present in the data graph. Extensions grow a surviving
    pattern by exactly one edge, guided by its embeddings:

    - back edges close a cycle between two already-present vertices;
    - forward edges attach one new vertex to a mapped vertex.

    The right-most path of the pattern's canonical code orders the
    work: back edges are tried from the right-most vertex toward the
    root first, and forward growth starts on the right-most path.
    Without heuristics the generator then sweeps the remaining vertex
    pairs and vertices, so every connected one-edge superpattern of a
    surviving pattern is produced (a pendant edge is a forward
    extension of its attach vertex, a cycle edge a back edge of some
    pair). With heuristics enabled the search is narrowed to the
    right-most path, trading that coverage for speed.

    All candidates are deduplicated by canonical key before being
    returned; consumers deduplicate again across patterns.
*/

use crate::canonical::CanonicalKey;
use crate::embed::Embedding;
use crate::graph::{DataGraph, Edge, EdgeType};
use crate::heuristics::Heuristics;
use crate::pattern::Pattern;
use std::collections::{HashMap, HashSet};

pub struct CandidateGenerator<'g> {
    graph: &'g DataGraph,
}

impl<'g> CandidateGenerator<'g> {
    pub fn new(graph: &'g DataGraph) -> Self {
        Self { graph }
    }

    /*
        Seeds
    */

    // One pattern per distinct edge type, in first-encounter order.
    // Undirected edges are enumerated once via the u < v guard.
    pub fn seed_patterns(&self) -> impl Iterator<Item = Pattern> + 'g {
        let g = self.graph;
        let mut seen: HashSet<EdgeType> = HashSet::new();
        let mut seeds = Vec::new();
        for u in 0..g.num_nodes() {
            let lu = g.vlabel(u);
            for (v, elab) in g.adj(u) {
                if !g.directed() && u >= *v {
                    continue;
                }
                let lv = g.vlabel(*v);
                let ty = EdgeType::of(lu, lv, elab.as_deref(), g.directed());
                if !seen.insert(ty) {
                    continue;
                }
                seeds.push(Pattern::new_unchecked(
                    g.directed(),
                    vec![lu.to_string(), lv.to_string()],
                    vec![Edge { u: 0, v: 1, label: elab.clone() }],
                ));
            }
        }
        seeds.into_iter()
    }

    // The two-node pattern realizing one edge type.
    pub fn seed_from_type(&self, ty: &EdgeType) -> Pattern {
        Pattern::new_unchecked(
            ty.directed,
            vec![ty.src_label.clone(), ty.dst_label.clone()],
            vec![Edge { u: 0, v: 1, label: ty.elabel.clone() }],
        )
    }

    /*
        Extensions
    */

    // Every distinct one-edge extension of `p` witnessed by its
    // embeddings. `allow_growth` gates vertex-adding extensions (the
    // driver clears it once the pattern has reached the size cap;
    // back edges keep the vertex count unchanged and are always
    // offered). `allowed` restricts new edges to the given edge
    // types. `heur` narrows and reorders the search as described in
    // the module comment.
    pub fn extensions(
        &self,
        p: &Pattern,
        embeddings: &[Embedding],
        heur: Option<&Heuristics<'g>>,
        allowed: Option<&HashSet<EdgeType>>,
        allow_growth: bool,
    ) -> Vec<Pattern> {
        let mut produced: HashSet<CanonicalKey> = HashSet::new();
        let mut out: Vec<Pattern> = Vec::new();
        if p.num_nodes() == 0 {
            return out;
        }
        let existing = p.edge_set();
        let rmpath = rightmost_path(p);
        debug_assert!(!rmpath.is_empty());
        let rm = *rmpath.last().unwrap();
        let ancestors = &rmpath[..rmpath.len() - 1];

        for emb in embeddings {
            for &w_p in ancestors.iter().rev() {
                self.back_edges(
                    p, emb, rm, w_p, &existing, allowed, &mut produced,
                    &mut out,
                );
            }
            if heur.is_none() {
                // coverage sweep over the remaining vertex pairs
                for a in (1..p.num_nodes()).rev() {
                    for b in (0..a).rev() {
                        if a == rm && ancestors.contains(&b) {
                            continue;
                        }
                        self.back_edges(
                            p, emb, a, b, &existing, allowed, &mut produced,
                            &mut out,
                        );
                    }
                }
            }
            if allow_growth {
                let grow: Vec<usize> = match heur {
                    Some(_) => {
                        let mut g = vec![rm];
                        g.extend_from_slice(ancestors);
                        g
                    }
                    None => {
                        let mut g = rmpath.clone();
                        g.extend(
                            (0..p.num_nodes()).filter(|i| !rmpath.contains(i)),
                        );
                        g
                    }
                };
                for &u_p in &grow {
                    self.grow_at(
                        p, emb, u_p, heur, allowed, &mut produced, &mut out,
                    );
                }
            }
        }
        out
    }

    // Extensions adding an edge between the mapped vertices u_p and
    // w_p, one per graph edge label not already present between them.
    #[allow(clippy::too_many_arguments)]
    fn back_edges(
        &self,
        p: &Pattern,
        emb: &Embedding,
        u_p: usize,
        w_p: usize,
        existing: &HashSet<(usize, usize, Option<&str>)>,
        allowed: Option<&HashSet<EdgeType>>,
        produced: &mut HashSet<CanonicalKey>,
        out: &mut Vec<Pattern>,
    ) {
        let u_g = emb[u_p];
        let w_g = emb[w_p];
        if !p.directed() {
            for elab in self.graph.edge_labels_between(u_g, w_g) {
                let (a, b) = (u_p.min(w_p), u_p.max(w_p));
                if existing.contains(&(a, b, elab.as_deref())) {
                    continue;
                }
                if !edge_type_allowed(
                    allowed,
                    p.vlabel(u_p),
                    p.vlabel(w_p),
                    elab.as_deref(),
                    false,
                ) {
                    continue;
                }
                let q = p.with_edge(Edge {
                    u: u_p,
                    v: w_p,
                    label: elab.clone(),
                });
                push_unique(q, produced, out);
            }
        } else {
            for (src_p, dst_p) in [(u_p, w_p), (w_p, u_p)] {
                let (src_g, dst_g) = (emb[src_p], emb[dst_p]);
                for elab in self.graph.edge_labels_between(src_g, dst_g) {
                    if existing.contains(&(src_p, dst_p, elab.as_deref())) {
                        continue;
                    }
                    if !edge_type_allowed(
                        allowed,
                        p.vlabel(src_p),
                        p.vlabel(dst_p),
                        elab.as_deref(),
                        true,
                    ) {
                        continue;
                    }
                    let q = p.with_edge(Edge {
                        u: src_p,
                        v: dst_p,
                        label: elab.clone(),
                    });
                    push_unique(q, produced, out);
                }
            }
        }
    }

    // Extensions attaching a new vertex to the mapped vertex u_p, one
    // per graph neighbor outside the embedding image.
    #[allow(clippy::too_many_arguments)]
    fn grow_at(
        &self,
        p: &Pattern,
        emb: &Embedding,
        u_p: usize,
        heur: Option<&Heuristics<'g>>,
        allowed: Option<&HashSet<EdgeType>>,
        produced: &mut HashSet<CanonicalKey>,
        out: &mut Vec<Pattern>,
    ) {
        let u_g = emb[u_p];
        let new_id = p.num_nodes();

        let out_owned;
        let out_neigh: &[(usize, Option<String>)] = match heur {
            Some(h) => {
                out_owned = h.neighbor_order(u_g);
                &out_owned
            }
            None => self.graph.adj(u_g),
        };
        for (v_g, elab) in out_neigh {
            if emb.contains(v_g) {
                continue;
            }
            if let Some(h) = heur {
                if !h.degree_prune(p.degree(u_p) + 1, self.graph.degree(*v_g))
                {
                    continue;
                }
            }
            let lv = self.graph.vlabel(*v_g);
            if !edge_type_allowed(
                allowed,
                p.vlabel(u_p),
                lv,
                elab.as_deref(),
                p.directed(),
            ) {
                continue;
            }
            let q = p.with_new_vertex(
                lv,
                Edge { u: u_p, v: new_id, label: elab.clone() },
            );
            push_unique(q, produced, out);
        }

        if self.graph.directed() {
            let in_owned;
            let in_neigh: &[(usize, Option<String>)] = match heur {
                Some(h) => {
                    in_owned = h.in_neighbor_order(u_g);
                    &in_owned
                }
                None => self.graph.rev(u_g),
            };
            for (v_g, elab) in in_neigh {
                if emb.contains(v_g) {
                    continue;
                }
                if let Some(h) = heur {
                    if !h
                        .degree_prune(p.degree(u_p) + 1, self.graph.degree(*v_g))
                    {
                        continue;
                    }
                }
                let lv = self.graph.vlabel(*v_g);
                if !edge_type_allowed(
                    allowed,
                    lv,
                    p.vlabel(u_p),
                    elab.as_deref(),
                    true,
                ) {
                    continue;
                }
                let q = p.with_new_vertex(
                    lv,
                    Edge { u: new_id, v: u_p, label: elab.clone() },
                );
                push_unique(q, produced, out);
            }
        }
    }
}

fn push_unique(
    q: Pattern,
    produced: &mut HashSet<CanonicalKey>,
    out: &mut Vec<Pattern>,
) {
    if produced.insert(q.key().clone()) {
        out.push(q);
    }
}

fn edge_type_allowed(
    allowed: Option<&HashSet<EdgeType>>,
    lu: &str,
    lv: &str,
    elabel: Option<&str>,
    directed: bool,
) -> bool {
    match allowed {
        None => true,
        Some(set) => set.contains(&EdgeType::of(lu, lv, elabel, directed)),
    }
}

// The chain of canonical-code parents from the latest-discovered
// vertex back to the root, reversed. An empty code yields 0..n.
pub fn rightmost_path(p: &Pattern) -> Vec<usize> {
    let code = &p.key().code;
    if code.is_empty() {
        return (0..p.num_nodes()).collect();
    }
    let mut seen: HashSet<usize> = HashSet::new();
    let mut parent: HashMap<usize, usize> = HashMap::new();
    let mut max_idx = 0;
    for entry in code {
        let (a, b) = (entry.i, entry.j);
        max_idx = max_idx.max(a).max(b);
        let a_seen = seen.contains(&a);
        let b_seen = seen.contains(&b);
        if !a_seen && !b_seen {
            // first entry discovers both endpoints; the smaller index
            // is the root
            let (root, child) = if a < b { (a, b) } else { (b, a) };
            parent.insert(child, root);
        } else if a_seen && !b_seen {
            parent.insert(b, a);
        } else if !a_seen && b_seen {
            parent.insert(a, b);
        }
        seen.insert(a);
        seen.insert(b);
    }
    let mut path = vec![max_idx];
    while let Some(&up) = parent.get(path.last().unwrap()) {
        path.push(up);
    }
    path.reverse();
    path
}

/*
    Unit tests
*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::Embedder;

    fn labels(labs: &[&str]) -> Vec<String> {
        labs.iter().map(|s| s.to_string()).collect()
    }

    fn triangle_graph() -> DataGraph {
        DataGraph::new(
            false,
            labels(&["X", "Y", "Z"]),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
        )
        .unwrap()
    }

    #[test]
    fn test_seed_patterns_cover_edge_types() {
        let g = triangle_graph();
        let seeds: Vec<Pattern> =
            CandidateGenerator::new(&g).seed_patterns().collect();
        assert_eq!(seeds.len(), 3);
        let keys: HashSet<&CanonicalKey> =
            seeds.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_seed_patterns_directed() {
        let g = DataGraph::new(
            true,
            labels(&["A", "B"]),
            vec![Edge::new(0, 1), Edge::new(1, 0)],
        )
        .unwrap();
        let seeds: Vec<Pattern> =
            CandidateGenerator::new(&g).seed_patterns().collect();
        assert_eq!(seeds.len(), 2);
    }

    #[test]
    fn test_rightmost_path_of_seed() {
        let p =
            Pattern::new(false, labels(&["X", "Y"]), vec![Edge::new(0, 1)])
                .unwrap();
        assert_eq!(rightmost_path(&p), vec![0, 1]);
    }

    #[test]
    fn test_extension_closes_triangle() {
        let g = triangle_graph();
        let gen = CandidateGenerator::new(&g);
        let embedder = Embedder::new(&g);
        // 2-edge path X-Y-Z
        let path = Pattern::new(
            false,
            labels(&["X", "Y", "Z"]),
            vec![Edge::new(0, 1), Edge::new(1, 2)],
        )
        .unwrap();
        let embs = embedder.embeddings(&path);
        assert_eq!(embs.len(), 1);
        // growth is off at the size cap; the closing back edge remains
        let exts = gen.extensions(&path, &embs, None, None, false);
        assert_eq!(exts.len(), 1);
        assert_eq!(exts[0].edges().len(), 3);
        let triangle = Pattern::new(
            false,
            labels(&["X", "Y", "Z"]),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
        )
        .unwrap();
        assert_eq!(exts[0].key(), triangle.key());
    }

    #[test]
    fn test_base_mode_closes_cycle_off_rmpath() {
        // in a one-label clique the surviving 2-edge path is
        // star-shaped; the closing edge joins its two leaves, which
        // the right-most path alone never offers
        let g = DataGraph::new(
            false,
            labels(&["A", "A", "A"]),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
        )
        .unwrap();
        let gen = CandidateGenerator::new(&g);
        let embedder = Embedder::new(&g);
        let star = Pattern::new(
            false,
            labels(&["A", "A", "A"]),
            vec![Edge::new(0, 1), Edge::new(0, 2)],
        )
        .unwrap();
        let embs = embedder.embeddings(&star);
        let exts = gen.extensions(&star, &embs, None, None, false);
        let triangle_key = Pattern::new(
            false,
            labels(&["A", "A", "A"]),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
        )
        .unwrap()
        .key()
        .clone();
        assert!(exts.iter().any(|q| *q.key() == triangle_key));
    }

    #[test]
    fn test_extensions_respect_allowed_types() {
        let g = triangle_graph();
        let gen = CandidateGenerator::new(&g);
        let embedder = Embedder::new(&g);
        let seed = Pattern::new(
            false,
            labels(&["X", "Y"]),
            vec![Edge::new(0, 1)],
        )
        .unwrap();
        let embs = embedder.embeddings(&seed);
        let mut allowed = HashSet::new();
        allowed.insert(EdgeType::of("X", "Y", None, false));
        allowed.insert(EdgeType::of("Y", "Z", None, false));
        let exts = gen.extensions(&seed, &embs, None, Some(&allowed), true);
        // only the X-Y-Z growth through the Y-Z type survives
        assert_eq!(exts.len(), 1);
        assert_eq!(exts[0].vlabels(), &labels(&["X", "Y", "Z"])[..]);
    }

    #[test]
    fn test_no_duplicate_candidates() {
        let g = DataGraph::new(
            false,
            labels(&["A", "A", "A", "A"]),
            vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(0, 3),
                Edge::new(1, 2),
                Edge::new(1, 3),
                Edge::new(2, 3),
            ],
        )
        .unwrap();
        let gen = CandidateGenerator::new(&g);
        let embedder = Embedder::new(&g);
        let seed =
            Pattern::new(false, labels(&["A", "A"]), vec![Edge::new(0, 1)])
                .unwrap();
        let embs = embedder.embeddings(&seed);
        let exts = gen.extensions(&seed, &embs, None, None, true);
        let keys: HashSet<CanonicalKey> =
            exts.iter().map(|q| q.key().clone()).collect();
        assert_eq!(keys.len(), exts.len());
    }
}
