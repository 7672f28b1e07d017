use std::error::Error;

use clap::Parser;
use samplestats::{args::Args, logging::setup_tracing, pipeline::run};
use tracing::error;

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _guard = setup_tracing()?;

    match run(args.input(), args.output()) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}
