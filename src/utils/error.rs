use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Completion request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Completion service returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("Completion service returned no choices")]
    EmptyCompletionError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Dataset error: {message}")]
    DatasetError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TriageError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Remote,
    Dataset,
    Configuration,
    Io,
}

impl TriageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::ApiStatusError { .. } | Self::EmptyCompletionError => {
                ErrorCategory::Remote
            }
            Self::DatasetError { .. } | Self::SerializationError(_) => ErrorCategory::Dataset,
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigParseError(_) => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Remote failures are absorbed at the pipeline stages; one that
            // escapes to the top still only affects a single run.
            Self::ApiError(_) | Self::ApiStatusError { .. } | Self::EmptyCompletionError => {
                ErrorSeverity::Medium
            }
            Self::DatasetError { .. } | Self::SerializationError(_) | Self::IoError(_) => {
                ErrorSeverity::High
            }
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigParseError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => {
                "Check network connectivity and the --api-base endpoint".to_string()
            }
            Self::ApiStatusError { status, .. } if *status == 401 => {
                "Verify that OPENAI_API_KEY holds a valid credential".to_string()
            }
            Self::ApiStatusError { .. } => {
                "Check the configured model name and request parameters".to_string()
            }
            Self::EmptyCompletionError => {
                "Retry the run; the service answered without any completion".to_string()
            }
            Self::DatasetError { .. } | Self::SerializationError(_) => {
                "Verify the dataset file is a MITRE ATT&CK STIX bundle (enterprise-attack.json)"
                    .to_string()
            }
            Self::MissingConfigError { field } => format!("Provide a value for {}", field),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value supplied for {}", field)
            }
            Self::ConfigParseError(_) => "Fix the TOML syntax in the --config file".to_string(),
            Self::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Remote => format!("Completion service problem: {}", self),
            ErrorCategory::Dataset => format!("ATT&CK dataset problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File system problem: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_critical() {
        let err = TriageError::MissingConfigError {
            field: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_auth_status_suggests_credential_check() {
        let err = TriageError::ApiStatusError {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("OPENAI_API_KEY"));
    }
}
