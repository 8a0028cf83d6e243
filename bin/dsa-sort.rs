use std::io;

use clap::Parser;
use dsa_drills::console::{write_sort_report, CommonArgs};
use dsa_drills::sort::{self, SortAlgorithm};
use dsa_drills::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bubble or insertion sort over a fixed integer array", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Sort algorithm
    #[arg(short, long, value_enum, default_value_t = SortAlgorithm::Bubble)]
    algorithm: SortAlgorithm,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(config) = args.common.bootstrap()? else {
        return Ok(());
    };

    let report = sort::run(args.algorithm, &config.search.data);

    let mut out = io::stdout().lock();
    write_sort_report(&mut out, &report, &config.display)?;

    Ok(())
}
