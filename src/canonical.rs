/*
    Canonical DFS codes for patterns.

    Every pattern is assigned the lexicographically smallest DFS
    enumeration over all seed edges. The resulting key is equal for
    exactly the patterns in the same isomorphism class (directed or
    undirected as applicable) and is the unit of deduplication
    throughout the miner.

    Enumeration outline:
    - Build an internal adjacency where each pattern edge appears
      twice: outgoing (tag 1) and incoming (tag 2) for directed
      patterns, tag 0 both ways for undirected ones.
    - Seed from every pattern edge. Directed seeds use the forward
      orientation only (the anchor is the structural edge source, so
      the seed set is numbering-invariant); undirected seeds try both
      endpoints as the root.
    - From each seed, repeatedly emit the smallest frontier edge until
      every pattern edge has been emitted once. The frontier ordering
      prefers the earliest-discovered anchor, then labels, then
      back-edges over forward-edges.

    Code entries carry direction flags 0 (undirected) or 1 (directed
    from the first listed endpoint to the second). An incoming edge
    discovered from its target end is emitted with the two discovery
    indices swapped, so tag 2 never appears in a key.
*/

use crate::graph::Edge;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/*
    Key types
*/

// One tuple of a DFS code: discovery indices of the two endpoints,
// their vertex labels, and the edge label flattened to "" when absent.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CodeEntry {
    pub i: usize,
    pub j: usize,
    pub from_label: String,
    pub elabel: String,
    pub to_label: String,
    pub dflag: u8,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CanonicalKey {
    pub directed: bool,
    pub code: Vec<CodeEntry>,
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.directed { 'd' } else { 'u' })?;
        for e in &self.code {
            write!(
                f,
                "({},{},{},{},{},{})",
                e.i, e.j, e.from_label, e.elabel, e.to_label, e.dflag
            )?;
        }
        Ok(())
    }
}

// Canonical key of the pattern described by (directed, vlabels, edges).
// An empty edge list yields the empty code.
pub fn canonical_key(
    directed: bool,
    vlabels: &[String],
    edges: &[Edge],
) -> CanonicalKey {
    let helper = CanonDfs::new(directed, vlabels, edges);
    CanonicalKey { directed, code: helper.canonical_code() }
}

/*
    Enumeration helper
*/

// (endpoint the edge is stored at, other endpoint, label, traversal tag)
// tags: 0 = undirected, 1 = outgoing, 2 = incoming
type AdjEntry<'a> = (usize, Option<&'a str>, u8);
// Normalized identity of a pattern edge, independent of which side it
// is traversed from.
type EdgeKey<'a> = (usize, usize, Option<&'a str>, u8);

struct CanonDfs<'a> {
    directed: bool,
    vlabels: &'a [String],
    p_adj: Vec<Vec<AdjEntry<'a>>>,
    edge_keys: BTreeSet<EdgeKey<'a>>,
}

impl<'a> CanonDfs<'a> {
    fn new(directed: bool, vlabels: &'a [String], edges: &'a [Edge]) -> Self {
        let n = vlabels.len();
        let mut p_adj: Vec<Vec<AdjEntry<'a>>> = vec![Vec::new(); n];
        let mut edge_keys = BTreeSet::new();
        for e in edges {
            let el = e.label.as_deref();
            if directed {
                p_adj[e.u].push((e.v, el, 1));
                p_adj[e.v].push((e.u, el, 2));
            } else {
                p_adj[e.u].push((e.v, el, 0));
                p_adj[e.v].push((e.u, el, 0));
            }
            edge_keys.insert(Self::norm(directed, e.u, e.v, el, 1));
        }
        Self { directed, vlabels, p_adj, edge_keys }
    }

    fn norm(
        directed: bool,
        u: usize,
        v: usize,
        el: Option<&'a str>,
        tag: u8,
    ) -> EdgeKey<'a> {
        if directed {
            // tag 2 means the underlying edge runs v -> u
            if tag == 2 {
                (v, u, el, 1)
            } else {
                (u, v, el, 1)
            }
        } else {
            (u.min(v), u.max(v), el, 0)
        }
    }

    fn norm_key(&self, u: usize, v: usize, el: Option<&'a str>, tag: u8) -> EdgeKey<'a> {
        Self::norm(self.directed, u, v, el, tag)
    }

    fn canonical_code(&self) -> Vec<CodeEntry> {
        let mut best: Option<Vec<CodeEntry>> = None;
        for &(u, v, el, _) in &self.edge_keys {
            let seed_tag = if self.directed { 1 } else { 0 };
            let mut starts = vec![(u, v)];
            if !self.directed && u != v {
                starts.push((v, u));
            }
            for (su, sv) in starts {
                let cand = self.enumerate_from(su, sv, el, seed_tag);
                if best.as_ref().map_or(true, |b| cand < *b) {
                    best = Some(cand);
                }
            }
        }
        best.unwrap_or_default()
    }

    fn enumerate_from(
        &self,
        su: usize,
        sv: usize,
        elab: Option<&'a str>,
        seed_tag: u8,
    ) -> Vec<CodeEntry> {
        let n = self.vlabels.len();
        let mut visited: Vec<Option<usize>> = vec![None; n];
        let mut order: Vec<usize> = Vec::new();
        let mut used: HashSet<EdgeKey<'a>> = HashSet::new();
        let mut code: Vec<CodeEntry> = Vec::new();

        self.emit(
            su, sv, elab, seed_tag, &mut visited, &mut order, &mut used,
            &mut code,
        );

        while used.len() < self.edge_keys.len() {
            // frontier: every unused edge incident to a visited endpoint
            let mut frontier: Vec<(usize, usize, Option<&'a str>, u8, usize)> =
                Vec::new();
            for &u in &order {
                let uidx = visited[u].unwrap();
                for &(v, el, tag) in &self.p_adj[u] {
                    if used.contains(&self.norm_key(u, v, el, tag)) {
                        continue;
                    }
                    frontier.push((u, v, el, tag, uidx));
                }
            }
            if frontier.is_empty() {
                // unreachable for connected patterns
                break;
            }
            frontier.sort_by_key(|&(u, v, el, tag, uidx)| {
                let vidx = visited[v];
                (
                    uidx,
                    self.vlabels[u].as_str(),
                    el.unwrap_or(""),
                    u8::from(vidx.is_none()),
                    vidx.map(|_| self.vlabels[v].as_str()).unwrap_or(""),
                    tag,
                    vidx.unwrap_or(usize::MAX),
                )
            });
            let (u, v, el, tag, _) = frontier[0];
            self.emit(
                u, v, el, tag, &mut visited, &mut order, &mut used, &mut code,
            );
        }
        code
    }

    #[allow(clippy::too_many_arguments)]
    fn emit(
        &self,
        u: usize,
        v: usize,
        el: Option<&'a str>,
        tag: u8,
        visited: &mut [Option<usize>],
        order: &mut Vec<usize>,
        used: &mut HashSet<EdgeKey<'a>>,
        code: &mut Vec<CodeEntry>,
    ) {
        let uidx = Self::assign(visited, order, u);
        let vidx = Self::assign(visited, order, v);
        let elabel = el.unwrap_or("").to_string();
        let entry = if tag == 2 {
            // the underlying edge runs v -> u; swap the indices and
            // keep the flag forward
            CodeEntry {
                i: vidx,
                j: uidx,
                from_label: self.vlabels[v].clone(),
                elabel,
                to_label: self.vlabels[u].clone(),
                dflag: 1,
            }
        } else {
            CodeEntry {
                i: uidx,
                j: vidx,
                from_label: self.vlabels[u].clone(),
                elabel,
                to_label: self.vlabels[v].clone(),
                dflag: tag,
            }
        };
        code.push(entry);
        used.insert(self.norm_key(u, v, el, tag));
    }

    fn assign(
        visited: &mut [Option<usize>],
        order: &mut Vec<usize>,
        u: usize,
    ) -> usize {
        match visited[u] {
            Some(i) => i,
            None => {
                let i = order.len();
                visited[u] = Some(i);
                order.push(u);
                i
            }
        }
    }
}

/*
    Unit tests
*/
