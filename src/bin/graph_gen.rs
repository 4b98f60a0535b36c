/*
    Generate a random labeled graph in the .lg text format.
    Deterministic for a fixed seed.
*/

use sgmine::gen::{random_graph, to_lg_lines, GenParams};
use sgmine::util;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "graph generator",
    about = "Generate a random labeled graph in .lg format."
)]
struct Args {
    // e.g. "testdata/random_20_30.lg"
    out: PathBuf,

    #[structopt(short, long, default_value = "20")]
    nodes: usize,

    #[structopt(short, long, default_value = "30")]
    edges: usize,

    #[structopt(short, long, default_value = "3")]
    vlabels: usize,

    // 0 leaves edges unlabeled
    #[structopt(long, default_value = "0")]
    elabels: usize,

    #[structopt(short, long, default_value = "0")]
    seed: u64,
}
impl Args {
    fn run(self) {
        let params = GenParams {
            num_nodes: self.nodes,
            num_edges: self.edges,
            vlabel_count: self.vlabels,
            elabel_count: self.elabels,
            seed: self.seed,
        };
        let (vlabels, edges) = random_graph(&params);
        let lines = to_lg_lines(&vlabels, &edges);
        util::lines_to_file(&self.out, &lines);
        println!(
            "Wrote {:?}: {} vertices, {} edges",
            self.out,
            vlabels.len(),
            edges.len()
        );
    }
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default()
            .filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );
    Args::from_args().run();
}
