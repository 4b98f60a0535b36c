/*
    Demo: mine a tiny labeled triangle with the base miner and print
    every frequent pattern with its support and embedding count.
*/

use sgmine::constants::{DEMO_MAX_SIZE, DEMO_MIN_SUPPORT};
use sgmine::driver;
use sgmine::graph::{DataGraph, Edge};
use sgmine::miner::{self, MinerConfig};

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default()
            .filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let vlabels =
        vec!["X".to_string(), "Y".to_string(), "Z".to_string()];
    let edges = vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
    let graph = DataGraph::new(false, vlabels, edges)
        .unwrap_or_else(|err| panic!("Could not build demo graph: {}", err));

    let config = MinerConfig {
        min_support: DEMO_MIN_SUPPORT,
        max_size: Some(DEMO_MAX_SIZE),
        ..Default::default()
    };
    let results = miner::mine(&graph, config)
        .unwrap_or_else(|err| panic!("Mining failed: {}", err));

    driver::print_results(&results);
}
