//! Error types for dataset loading and access.
//!
//! Row-level defects never surface here: rows with unparseable dates are
//! dropped by the loader. These errors describe conditions that stop the
//! dataset from being produced at all.

use std::fmt;
use std::path::Path;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Structured context for dataset errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "load_eclipses", "read_config")
    pub operation: Option<String>,
    /// The file involved, if any
    pub path: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the file path.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().display().to_string());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref path) = self.path {
            parts.push(format!("path={}", path));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for dataset operations
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The source file is missing or unreadable.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },

    /// The file could not be decoded as delimited text (e.g. broken header).
    #[error("Parse error: {message} {context}")]
    Parse {
        message: String,
        context: ErrorContext,
    },

    /// A required column is absent from the header row.
    #[error("Missing column '{column}' {context}")]
    MissingColumn {
        column: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Internal/unexpected errors.
    #[error("Internal error: {message} {context}")]
    Internal {
        message: String,
        context: ErrorContext,
    },
}

impl DatasetError {
    /// Create an I/O error for a file path.
    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            context: ErrorContext::default().with_path(path),
        }
    }

    /// Create a missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a configuration error with context.
    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Configuration {
            message: message.into(),
            context,
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Io { context, .. } => context,
            Self::Parse { context, .. } => context,
            Self::MissingColumn { context, .. } => context,
            Self::Configuration { context, .. } => context,
            Self::Internal { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::Io { context, .. }
            | Self::Parse { context, .. }
            | Self::MissingColumn { context, .. }
            | Self::Configuration { context, .. }
            | Self::Internal { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.context_mut().operation = Some(operation.into());
        self
    }

    /// Add or update the file path in the error context.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.context_mut().path = Some(path.as_ref().display().to_string());
        self
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        let mut context = ErrorContext::default();
        if let Some(position) = err.position() {
            context = context.with_details(format!("line={}", position.line()));
        }
        match err.kind() {
            csv::ErrorKind::Io(io) => DatasetError::Io {
                message: io.to_string(),
                context,
            },
            _ => DatasetError::Parse {
                message: err.to_string(),
                context,
            },
        }
    }
}
