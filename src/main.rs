//! CLI entry point for multipoint-statistics evaluation of exemplar images

use anodi::io::cli::{BatchEvaluator, Cli};
use clap::Parser;

fn main() -> anodi::Result<()> {
    let cli = Cli::parse();
    let mut evaluator = BatchEvaluator::new(cli);
    evaluator.process()
}
