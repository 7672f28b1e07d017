use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use tracing::{debug, info, instrument};

use crate::{
    data::samples::Samples,
    error::StatsError,
    util::{format_utils::format_value, math_utils::Deviation},
};

/// Mean and sample standard deviation of one input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub deviation: Deviation,
}

impl Summary {
    /// # Errors
    ///
    /// `StatsError::EmptyInput` when there are no samples to average.
    pub fn from_samples(samples: &Samples) -> Result<Self, StatsError> {
        let moments = samples.moments();
        let mean = moments.mean().ok_or_else(|| StatsError::EmptyInput {
            path: samples.origin().to_path_buf(),
        })?;
        Ok(Self {
            count: moments.count(),
            mean,
            deviation: moments.sample_std_deviation(),
        })
    }
}

/// The output line, without the trailing newline: `<mean>, <deviation>`.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", format_value(self.mean), self.deviation)
    }
}

/// Creates (or truncates) `path` and writes the summary as a single line.
#[instrument(level = "debug", skip(summary), fields(path = %path.display()))]
pub fn write_summary(path: &Path, summary: &Summary) -> Result<(), StatsError> {
    let file = File::create(path).map_err(|e| StatsError::file_access(path, e))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", summary).map_err(|e| StatsError::file_access(path, e))?;
    writer.flush().map_err(|e| StatsError::file_access(path, e))?;
    debug!("Summary written");
    Ok(())
}

/// Reads `input`, summarises it and writes the result to `output`.
///
/// The output file is only touched once the summary has been computed, so a
/// failed run leaves any existing output untouched.
#[instrument(level = "info", skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn run<I: AsRef<Path>, O: AsRef<Path>>(input: I, output: O) -> Result<Summary, StatsError> {
    let samples = Samples::load(input)?;
    let summary = Summary::from_samples(&samples)?;
    info!(
        count = summary.count,
        mean = summary.mean,
        deviation = summary.deviation.value(),
        "Computed summary"
    );
    write_summary(output.as_ref(), &summary)?;
    Ok(summary)
}
