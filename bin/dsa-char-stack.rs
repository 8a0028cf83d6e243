use std::io;

use clap::Parser;
use dsa_drills::console::{run_char_stack_demo, CommonArgs};
use dsa_drills::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Push a string onto a character stack, display it, then pop it back", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Characters to push
    #[arg(short, long, default_value = "Data Science")]
    text: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(config) = args.common.bootstrap()? else {
        return Ok(());
    };

    let mut out = io::stdout().lock();
    run_char_stack_demo(&args.text, config.structures.capacity, &mut out)?;

    Ok(())
}
