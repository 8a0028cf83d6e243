use std::io;

use clap::Parser;
use dsa_drills::console::{CommonArgs, InputReader, ListSession};
use dsa_drills::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Menu-driven singly linked list", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.common.bootstrap()?.is_none() {
        return Ok(());
    }

    let mut input = InputReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    let mut session = ListSession::new();
    session.run(&mut input, &mut out)?;

    Ok(())
}
