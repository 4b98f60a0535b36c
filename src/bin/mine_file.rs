/*
    Mine a graph stored in the .lg text format.
*/

use sgmine::driver::{self, Mode};
use sgmine::miner::MinerConfig;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mine a graph file",
    about = "Run the frequent-subgraph miner on an .lg input file."
)]
struct Args {
    // e.g. "testdata/triangle.lg"
    path: PathBuf,

    #[structopt(short, long)]
    directed: bool,

    // MNI support threshold
    #[structopt(short = "s", long, default_value = "2")]
    min_support: usize,

    // maximum pattern vertex count
    #[structopt(short = "m", long)]
    max_size: Option<usize>,

    // "base" or "prefiltered"
    #[structopt(long, default_value = "base")]
    mode: Mode,

    // enable ordering/pruning heuristics (prefiltered mode)
    #[structopt(long)]
    heuristics: bool,

    #[structopt(short, long)]
    parallel: bool,

    #[structopt(short, long, default_value = "2")]
    workers: usize,

    // cap on embeddings enumerated per pattern
    #[structopt(long)]
    embed_cap: Option<usize>,

    // save a JSON summary under results/
    #[structopt(short, long)]
    out: bool,
}
impl Args {
    fn run(self) {
        let config = MinerConfig {
            min_support: self.min_support,
            max_size: self.max_size,
            parallel: self.parallel,
            max_workers: self.workers,
            use_edge_type_prefilter: matches!(self.mode, Mode::Prefiltered),
            use_heuristics: self.heuristics,
            embed_cap: self.embed_cap,
        };
        if let Err(err) =
            driver::run_file(&self.path, self.directed, config, self.out)
        {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default()
            .filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );
    Args::from_args().run();
}
