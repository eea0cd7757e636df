//! Error types for input validation, projection and assumption loading

use thiserror::Error;

/// An input field fell outside its documented range
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {message} (got {value})")]
pub struct ValidationError {
    /// Input field name as it appears in the JSON record (camelCase)
    pub field: &'static str,
    /// Offending value
    pub value: f64,
    /// Human-readable constraint description
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, value: f64, message: impl Into<String>) -> Self {
        Self {
            field,
            value,
            message: message.into(),
        }
    }
}

/// Failure of a single projection run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Replacement ratio is undefined when the projected final salary is not positive
    #[error("final projected salary is {0}; replacement ratio is undefined")]
    ZeroFinalSalary(f64),

    /// A projected amount overflowed or became NaN
    #[error("projected {quantity} is not a finite amount (got {value})")]
    NonFiniteResult { quantity: &'static str, value: f64 },
}

impl ProjectionError {
    /// Field name for validation failures, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ProjectionError::Validation(err) => Some(err.field),
            ProjectionError::ZeroFinalSalary(_) | ProjectionError::NonFiniteResult { .. } => None,
        }
    }
}

/// Failure while loading assumption parameters or member batches from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("i/o error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not parse {what} from {value:?}")]
    Parse { what: &'static str, value: String },

    #[error("unknown {kind} strategy {name:?}")]
    UnknownStrategy { kind: &'static str, name: String },

    #[error("missing required parameter {0:?}")]
    MissingParameter(&'static str),
}
