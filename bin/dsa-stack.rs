use std::io;

use clap::Parser;
use dsa_drills::console::{CommonArgs, InputReader, StackSession};
use dsa_drills::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Menu-driven fixed-capacity integer stack", long_about = None)]
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

    let mut session = StackSession::new(config.structures.capacity);
    session.run(&mut input, &mut out)?;

    Ok(())
}
