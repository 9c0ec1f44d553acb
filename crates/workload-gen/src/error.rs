use std::fmt;
use std::path::PathBuf;

/// Errors raised while configuring or running a generation pass.
#[derive(Debug)]
pub enum GenError {
    /// `read_proportion` outside `[0, 1]` (or NaN).
    ReadProportion(f64),
    /// `value_length` of zero.
    ValueLength,
    /// `key_count` of zero.
    KeyCount,
    /// `operations` of zero.
    Operations,
    /// Empty client-invocation prefix.
    Client,
    /// Zipf skew that is not a positive finite number.
    Skew(f64),
    /// `key_count` too large for the Zipf cumulative table.
    ZipfKeyCount { key_count: u64, max: u64 },
    /// Config file could not be read or parsed.
    Config { path: PathBuf, message: String },
    /// Output file could not be created or written.
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::ReadProportion(v) => {
                write!(f, "read_proportion must be between 0 and 1 (got {v})")
            }
            GenError::ValueLength => write!(f, "value_length must be positive"),
            GenError::KeyCount => write!(f, "key_count must be positive"),
            GenError::Operations => write!(f, "operations must be positive"),
            GenError::Client => write!(f, "client must not be empty"),
            GenError::Skew(s) => write!(f, "zipf skew must be positive and finite (got {s})"),
            GenError::ZipfKeyCount { key_count, max } => {
                write!(f, "key_count {key_count} exceeds the zipf limit of {max}")
            }
            GenError::Config { path, message } => {
                write!(f, "failed to load config {}: {message}", path.display())
            }
            GenError::Output { path, source } => {
                write!(f, "failed to write output file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
