use std::io;

use clap::Parser;
use dsa_drills::console::{write_search_report, CommonArgs};
use dsa_drills::search::{self, SearchAlgorithm};
use dsa_drills::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Linear or binary search over a fixed integer array", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Search algorithm (binary search runs on a sorted copy)
    #[arg(short, long, value_enum, default_value_t = SearchAlgorithm::Linear)]
    algorithm: SearchAlgorithm,

    /// Value to search for (overrides config file)
    #[arg(short, long, allow_negative_numbers = true)]
    key: Option<i32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(config) = args.common.bootstrap()? else {
        return Ok(());
    };

    let key = args.key.unwrap_or(config.search.key);
    let report = search::run(args.algorithm, &config.search.data, key);

    let mut out = io::stdout().lock();
    write_search_report(&mut out, &report, &config.display)?;

    Ok(())
}
