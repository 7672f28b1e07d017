use std::{num::ParseFloatError, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Unable to access file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse line {line} (`{value}`) as a number: {source}")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Input {} contains no values; the mean is undefined.", .path.display())]
    EmptyInput { path: PathBuf },
}

impl StatsError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StatsError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
