/*
    The mining driver: frontier expansion with support gating.

    A frontier of candidate patterns is evaluated pass by pass;
    patterns whose MNI support reaches the threshold are recorded
    (keyed by canonical key) and extended into the next frontier.
    Anti-monotonicity of MNI support bounds the expansion even
    without a size cap.

    Two configurations share the loop. The base mode seeds from every
    edge type and extends with full coverage. The pre-filtered mode
    first drops edge types occurring fewer than `min_support` times,
    seeds only from the surviving types (most frequent first), and
    restricts extensions to them; it may additionally enable the
    ordering/pruning heuristics.

    Evaluation of one pattern (its complete embedding enumeration) is
    the unit of parallelism. The graph is shared read-only with the
    worker pool; frontier, result map, and dedup state stay on the
    coordinator.
*/

use crate::candidate::CandidateGenerator;
use crate::canonical::CanonicalKey;
use crate::embed::{mni_support, Embedder, Embedding};
use crate::errors::Error;
use crate::graph::{DataGraph, EdgeType};
use crate::heuristics::Heuristics;
use crate::pattern::Pattern;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/*
    Configuration
*/

#[derive(Clone, Debug)]
pub struct MinerConfig {
    // support threshold (MNI)
    pub min_support: usize,
    // maximum pattern vertex count, if any
    pub max_size: Option<usize>,
    // evaluate embeddings on a worker pool
    pub parallel: bool,
    pub max_workers: usize,
    // pre-filtered mode: seed and extend only through frequent edge
    // types
    pub use_edge_type_prefilter: bool,
    pub use_heuristics: bool,
    // optional cap on embeddings enumerated per pattern; when hit the
    // record is flagged truncated and its support is a lower bound
    pub embed_cap: Option<usize>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            max_size: None,
            parallel: false,
            max_workers: 1,
            use_edge_type_prefilter: false,
            use_heuristics: false,
            embed_cap: None,
        }
    }
}

/*
    Results
*/

// Created when a pattern first passes the support gate; never
// mutated afterwards.
#[derive(Clone, Debug)]
pub struct PatternRecord {
    pub pattern: Pattern,
    pub support: usize,
    pub full_support: usize,
    pub embeddings: Vec<Embedding>,
    pub truncated: bool,
}

impl PatternRecord {
    pub fn summary(&self) -> PatternSummary {
        PatternSummary {
            key: self.pattern.key().to_string(),
            num_nodes: self.pattern.num_nodes(),
            num_edges: self.pattern.edges().len(),
            support: self.support,
            full_support: self.full_support,
            num_embeddings: self.embeddings.len(),
            truncated: self.truncated,
        }
    }
}

// Serializable per-pattern digest used by the file driver.
#[derive(Clone, Debug, Serialize)]
pub struct PatternSummary {
    pub key: String,
    pub num_nodes: usize,
    pub num_edges: usize,
    pub support: usize,
    pub full_support: usize,
    pub num_embeddings: usize,
    pub truncated: bool,
}

// Ordered by canonical key, so iteration and serialization are
// stable across runs and worker schedules.
pub type MiningResults = BTreeMap<CanonicalKey, PatternRecord>;

/*
    Miner
*/

pub struct Miner<'g> {
    graph: &'g DataGraph,
    config: MinerConfig,
    embedder: Embedder<'g>,
    candgen: CandidateGenerator<'g>,
    heur: Option<Heuristics<'g>>,
    pool: Option<rayon::ThreadPool>,
}

impl<'g> Miner<'g> {
    pub fn new(graph: &'g DataGraph, config: MinerConfig) -> Result<Self, Error> {
        if config.max_workers == 0 {
            return Err(Error::BadConfig(
                "max_workers must be at least 1".to_string(),
            ));
        }
        if config.max_size == Some(0) {
            return Err(Error::BadConfig(
                "max_size must be at least 1".to_string(),
            ));
        }
        if config.embed_cap == Some(0) {
            return Err(Error::BadConfig(
                "embed_cap must be at least 1".to_string(),
            ));
        }
        let heur = if config.use_heuristics {
            Some(Heuristics::new(graph))
        } else {
            None
        };
        let pool = if config.parallel && config.max_workers > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.max_workers)
                .build()
                .map_err(|err| Error::PoolBuild(err.to_string()))?;
            Some(pool)
        } else {
            None
        };
        Ok(Self {
            graph,
            config,
            embedder: Embedder::new(graph),
            candgen: CandidateGenerator::new(graph),
            heur,
            pool,
        })
    }

    // Run the mining loop to exhaustion and return every frequent
    // pattern with its witness embeddings.
    pub fn mine(&self) -> MiningResults {
        let tau = self.config.min_support;
        let (allowed, seeds) = self.seed_frontier();
        info!(
            "mining: tau={}, {} seed patterns, prefilter={}, heuristics={}",
            tau,
            seeds.len(),
            self.config.use_edge_type_prefilter,
            self.config.use_heuristics,
        );

        let mut results: MiningResults = BTreeMap::new();
        let mut frontier = seeds;
        let mut pass = 0usize;
        while !frontier.is_empty() {
            debug!("pass {}: {} candidate patterns", pass, frontier.len());
            let eval = self.evaluate(frontier);
            let mut next: Vec<Pattern> = Vec::new();
            for (p, embeddings, truncated) in eval {
                let k = p.num_nodes();
                let support = mni_support(&embeddings, k);
                if support < tau {
                    continue;
                }
                let allow_growth =
                    self.config.max_size.map_or(true, |m| k < m);
                for q in self.candgen.extensions(
                    &p,
                    &embeddings,
                    self.heur.as_ref(),
                    allowed.as_ref(),
                    allow_growth,
                ) {
                    if !results.contains_key(q.key()) {
                        next.push(q);
                    }
                }
                let full_support =
                    self.embedder.support_count(&p, self.config.embed_cap);
                results.insert(
                    p.key().clone(),
                    PatternRecord {
                        pattern: p,
                        support,
                        full_support,
                        embeddings,
                        truncated,
                    },
                );
            }
            let mut seen: HashSet<CanonicalKey> = HashSet::new();
            frontier = next
                .into_iter()
                .filter(|q| seen.insert(q.key().clone()))
                .collect();
            pass += 1;
        }
        info!("mining finished: {} frequent patterns", results.len());
        results
    }

    // Seeds for the configured mode, plus the allowed edge types in
    // pre-filtered mode.
    fn seed_frontier(&self) -> (Option<HashSet<EdgeType>>, Vec<Pattern>) {
        if !self.config.use_edge_type_prefilter {
            return (None, self.candgen.seed_patterns().collect());
        }
        let counts = self.graph.edge_type_counts();
        let mut kept: Vec<(EdgeType, usize)> = counts
            .into_iter()
            .filter(|(_, c)| *c >= self.config.min_support)
            .collect();
        // most frequent types first; count ties stay in type order
        kept.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
        let allowed: HashSet<EdgeType> =
            kept.iter().map(|(ty, _)| ty.clone()).collect();
        debug!("prefilter kept {} edge types", allowed.len());
        let seeds = kept
            .iter()
            .map(|(ty, _)| self.candgen.seed_from_type(ty))
            .collect();
        (Some(allowed), seeds)
    }

    // Enumerate embeddings for a whole frontier, on the pool when one
    // is configured. Output order follows input order either way.
    fn evaluate(
        &self,
        patterns: Vec<Pattern>,
    ) -> Vec<(Pattern, Vec<Embedding>, bool)> {
        let cap = self.config.embed_cap;
        let eval_one = |p: Pattern| {
            let (embeddings, truncated) =
                self.embedder.embeddings_capped(&p, cap);
            (p, embeddings, truncated)
        };
        match &self.pool {
            Some(pool) if patterns.len() > 1 => pool.install(|| {
                patterns.into_par_iter().map(eval_one).collect()
            }),
            _ => patterns.into_iter().map(eval_one).collect(),
        }
    }
}

// Convenience entry: build a miner for `config` and run it.
pub fn mine(
    graph: &DataGraph,
    config: MinerConfig,
) -> Result<MiningResults, Error> {
    Ok(Miner::new(graph, config)?.mine())
}

/*
    Unit tests
*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn labels(labs: &[&str]) -> Vec<String> {
        labs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_validation() {
        let g = DataGraph::new(false, labels(&["A"]), Vec::new()).unwrap();
        let bad = MinerConfig { max_workers: 0, ..Default::default() };
        assert!(matches!(Miner::new(&g, bad), Err(Error::BadConfig(_))));
        let bad = MinerConfig { max_size: Some(0), ..Default::default() };
        assert!(matches!(Miner::new(&g, bad), Err(Error::BadConfig(_))));
        let bad = MinerConfig { embed_cap: Some(0), ..Default::default() };
        assert!(matches!(Miner::new(&g, bad), Err(Error::BadConfig(_))));
    }

    #[test]
    fn test_truncated_records_are_flagged() {
        let mut edges = Vec::new();
        for u in 0..4 {
            for v in (u + 1)..4 {
                edges.push(Edge::new(u, v));
            }
        }
        let g =
            DataGraph::new(false, labels(&["A", "A", "A", "A"]), edges)
                .unwrap();
        let config = MinerConfig {
            min_support: 1,
            max_size: Some(3),
            embed_cap: Some(3),
            ..Default::default()
        };
        let results = mine(&g, config).unwrap();
        assert!(!results.is_empty());
        for rec in results.values() {
            assert!(rec.truncated);
            assert!(rec.embeddings.len() <= 3);
            assert!(rec.full_support <= 3);
        }
    }
}
