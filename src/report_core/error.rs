//! Error taxonomy for the report pipeline
//!
//! Every error is fatal: the run either produces the full report or nothing.

#[derive(Debug)]
pub enum ReportError {
    /// The record source is missing or unreadable.
    Load(std::io::Error),
    /// A field could not be parsed (malformed date or numeric value).
    Parse { field: String, detail: String },
    /// A singular headline metric was requested over zero rows.
    EmptyDataset(&'static str),
    /// The JSON summary export failed.
    Summary(serde_json::Error),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Load(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Summary(err)
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => ReportError::Load(e),
            other => ReportError::Parse {
                field: "record".to_string(),
                detail: format!("{:?}", other),
            },
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Load(e) => write!(f, "load error: {}", e),
            ReportError::Parse { field, detail } => {
                write!(f, "parse error in field `{}`: {}", field, detail)
            }
            ReportError::EmptyDataset(what) => {
                write!(f, "empty dataset: cannot compute {}", what)
            }
            ReportError::Summary(e) => write!(f, "summary export error: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}
