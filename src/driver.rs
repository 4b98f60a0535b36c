/*
    The driver:
    - loads a graph file, runs the configured miner, and prints or
      saves the discovered patterns. The binaries are thin wrappers
      around this module.
*/

use crate::constants::RESULTS_DIR;
use crate::errors::Error;
use crate::loader;
use crate::miner::{self, MinerConfig, MiningResults, PatternSummary};
use crate::util;
use log::info;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/*
    Exposed enum for which mining configuration to use
*/

#[derive(Clone, Copy, Debug)]
pub enum Mode {
    Base,
    Prefiltered,
}
impl FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "b" | "base" => Ok(Mode::Base),
            "p" | "prefiltered" => Ok(Mode::Prefiltered),
            _ => Err(format!("Could not parse as Mode: {}", s)),
        }
    }
}

/*
    Result display
*/

pub fn print_results(results: &MiningResults) {
    println!("Found {} frequent patterns:", results.len());
    for (key, rec) in results {
        println!("Pattern key: {}", key);
        println!(
            "  |V|={} |E|={}",
            rec.pattern.num_nodes(),
            rec.pattern.edges().len()
        );
        println!("  support: {}", rec.support);
        println!("  full support: {}", rec.full_support);
        println!("  embeddings count: {}", rec.embeddings.len());
        if rec.truncated {
            println!("  (embedding enumeration capped)");
        }
        println!();
    }
}

pub fn summaries(results: &MiningResults) -> Vec<PatternSummary> {
    results.values().map(|rec| rec.summary()).collect()
}

/*
    Main driver to mine a graph file
*/

pub fn run_file(
    path: &Path,
    directed: bool,
    config: MinerConfig,
    save_results: bool,
) -> Result<MiningResults, Error> {
    let graph = loader::load_lg(directed, path)?;
    info!(
        "loaded {:?}: {} vertices, {} edges",
        path,
        graph.num_nodes(),
        graph.num_edges()
    );

    let results = miner::mine(&graph, config)?;
    print_results(&results);

    if save_results {
        fs::create_dir_all(RESULTS_DIR)?;
        let out = format!(
            "{}/mine-{}.json",
            RESULTS_DIR,
            util::current_datetime_str()
        );
        util::to_json_file(&out, summaries(&results));
        println!("Results saved to {}", out);
    }
    Ok(results)
}
