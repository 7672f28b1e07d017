use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{error::StatsError, util::math_utils::RunningMoments};

/// The ordered values read from an input file, one per non-blank line.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    origin: PathBuf,
    values: Vec<f64>,
}

impl Samples {
    /// Opens `path` and parses every non-blank line as an `f64`.
    ///
    /// # Errors
    ///
    /// `StatsError::FileAccess` if the file cannot be opened or read, and
    /// `StatsError::Parse` for the first line that is not a number.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StatsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| StatsError::file_access(path, e))?;
        let samples = Self::from_reader(BufReader::new(file), path)?;
        info!(count = samples.len(), "Loaded samples");
        Ok(samples)
    }

    /// Parses samples from any buffered reader. `origin` names the source in errors.
    ///
    /// Lines that are not valid UTF-8 are treated as unparseable text.
    pub fn from_reader<R: BufRead, P: Into<PathBuf>>(
        reader: R,
        origin: P,
    ) -> Result<Self, StatsError> {
        let origin = origin.into();
        let mut values = Vec::new();
        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| StatsError::file_access(&origin, e))?;
            let text = String::from_utf8_lossy(&line);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                debug!(line = index + 1, "Skipping blank line");
                continue;
            }
            let value = trimmed.parse::<f64>().map_err(|source| StatsError::Parse {
                line: index + 1,
                value: trimmed.to_string(),
                source,
            })?;
            values.push(value);
        }
        Ok(Self { origin, values })
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn moments(&self) -> RunningMoments {
        RunningMoments::from_values(&self.values)
    }
}
