//! Export sinks for generated profiles.
//!
//! Sinks are write-only: they consume point sequences and feed nothing back
//! into the geometric core. Each format sits behind a cargo feature flag.

#[cfg(feature = "svg-io")]
pub mod svg;

/// Generic I/O and format-conversion errors.
///
/// Kept separate from [GearError](crate::errors::GearError): a sink failure is
/// an environment problem, never a geometry problem.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIo(error) => write!(f, "std::io::Error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
