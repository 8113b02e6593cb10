//! Typed report errors.
//!
//! Traversals themselves are total: absence of a path is a normal return
//! value, never an error. The only fallible surface in this crate is
//! serializing a [`crate::report::SearchReport`].

/// Failure while serializing a diagnostic report.
#[derive(Debug)]
pub enum ReportError {
    /// The report could not be encoded as JSON.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "report serialization failed: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}
