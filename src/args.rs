use std::path::PathBuf;

use clap::Parser;

/// Computes the mean and sample standard deviation of a file of numbers.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
pub struct Args {
    /// File with one number per line
    input: PathBuf,
    /// File the `<mean>, <standard deviation>` line is written to
    output: PathBuf,
}

impl Args {
    pub fn input(&self) -> &PathBuf {
        &self.input
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }
}
