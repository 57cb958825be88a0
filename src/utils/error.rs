use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Configuration error in '{field}': {message}")]
    ConfigurationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Config parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("No tokio runtime available: {message}")]
    SchedulerUnavailable { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl AdapterError {
    pub fn configuration(field: &str, message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigParseError { .. } => ErrorCategory::Configuration,
            Self::SchedulerUnavailable { .. } | Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ConfigurationError { field, .. } => {
                format!("Provide a non-empty value for '{}'", field)
            }
            Self::MissingConfigError { field } => {
                format!("Set '{}' via flag, config file or environment variable", field)
            }
            Self::ConfigParseError { .. } => "Check the config file for TOML syntax errors".to_string(),
            Self::SchedulerUnavailable { .. } => {
                "Construct the adapter from inside a tokio runtime or pass a runtime handle".to_string()
            }
            Self::IoError(_) => "Make sure the config file exists and is readable".to_string(),
        }
    }

    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigurationError { field, .. } => format!("Invalid Twitter credential: {}", field),
            Self::MissingConfigError { field } => format!("Missing Twitter credential: {}", field),
            Self::ConfigParseError { .. } => "Config file could not be parsed".to_string(),
            Self::SchedulerUnavailable { .. } => "No async runtime is running".to_string(),
            Self::IoError(e) => format!("Could not read config file: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
