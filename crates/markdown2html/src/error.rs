use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    MissingSource = 1,
    Usage = 2,
    Io = 3,
    InvalidConfig = 4,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Missing {}", .0.display())]
    MissingSource(PathBuf),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingSource(_) => ExitCode::MissingSource,
            Self::Io { .. } => ExitCode::Io,
            Self::InvalidConfig(_) => ExitCode::InvalidConfig,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
