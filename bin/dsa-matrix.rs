use std::io;

use clap::Parser;
use dsa_drills::console::{CommonArgs, InputReader, MatrixSession};
use dsa_drills::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Multiply two integer matrices read from the console", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(config) = args.common.bootstrap()? else {
        return Ok(());
    };

    let mut input = InputReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    let session = MatrixSession::new(config.matrix.max_dim, config.json_output());
    if let Err(e) = session.run(&mut input, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
