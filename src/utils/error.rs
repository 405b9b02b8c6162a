use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid date format in {entity} {id}")]
    InvalidDate { entity: String, id: String },

    #[error("End date is before start date in {entity} {id}")]
    InvalidRange { entity: String, id: i64 },

    #[error("Effort days are greater than working days in project {id}")]
    InfeasibleConfiguration { id: i64 },

    #[error("Invalid input document: {message}")]
    InvalidDocument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Config,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::InvalidDate { .. }
            | ReportError::InvalidRange { .. }
            | ReportError::InfeasibleConfiguration { .. }
            | ReportError::InvalidDocument { .. } => ErrorCategory::Validation,
            ReportError::IoError(_) => ErrorCategory::Input,
            ReportError::SerializationError(_) | ReportError::CsvError(_) => ErrorCategory::Output,
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrorSeverity::Medium
            }
            ReportError::IoError(_) => ErrorSeverity::Critical,
            ReportError::SerializationError(_) | ReportError::CsvError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    /// True for the one expected, gracefully reported failure: the input
    /// document file does not exist.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ReportError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Input file not found".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::InvalidDate { .. } => {
                "Fix the offending date in the input document; all dates must be YYYY-MM-DD"
            }
            ReportError::InvalidRange { .. } => {
                "Swap or correct the since/until dates so that until >= since"
            }
            ReportError::InfeasibleConfiguration { .. } => {
                "Lower effort_days or widen the project date range"
            }
            ReportError::InvalidDocument { .. } => {
                "Check the input document structure against the expected schema"
            }
            ReportError::IoError(_) => "Check that the file exists and is readable",
            ReportError::SerializationError(_) => "Check that the input file contains valid JSON",
            ReportError::CsvError(_) => "Check that the output location is writable",
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                "Review the configuration values and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
