pub mod candidate;
pub mod canonical;
pub mod constants;
pub mod driver;
pub mod embed;
pub mod errors;
pub mod gen;
pub mod graph;
pub mod heuristics;
pub mod loader;
pub mod materialize;
pub mod miner;
pub mod pattern;
pub mod util;
