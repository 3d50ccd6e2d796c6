use crate::domain::model::DraftField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: DraftField },

    #[error("Index {requested} out of range for {length} items")]
    IndexOutOfRange { requested: usize, length: usize },

    #[error("Carousel requires at least one item")]
    EmptyCarousel,

    #[error("Unknown form field: {name}")]
    UnknownField { name: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue { field: DraftField, value: String },

    #[error("A submission is still in progress")]
    SubmissionInProgress,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DeskError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DeskError::MissingRequiredField { .. } => {
                "Please fill in all required fields (Name, Phone, and Service)".to_string()
            }
            DeskError::IndexOutOfRange { requested, length } => {
                format!(
                    "There is no testimonial #{} (only {} available)",
                    requested.saturating_add(1),
                    length
                )
            }
            DeskError::SubmissionInProgress => {
                "Your previous request is still being sent".to_string()
            }
            DeskError::ConfigError { .. }
            | DeskError::ConfigValidationError { .. }
            | DeskError::InvalidConfigValueError { .. } => {
                format!("The practice configuration is invalid: {}", self)
            }
            other => other.to_string(),
        }
    }

    /// 建議的修復方式
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeskError::MissingRequiredField { .. } => {
                "Provide the patient name, a phone number and the requested service"
            }
            DeskError::IndexOutOfRange { .. } => "Pick an index between 0 and the number of items minus one",
            DeskError::EmptyCarousel => "Add at least one testimonial to the configuration",
            DeskError::UnknownField { .. } => {
                "Use one of: name, phone, email, service, preferredDate, preferredTime, message, isEmergency"
            }
            DeskError::InvalidFieldValue { .. } => "Use true or false for the emergency flag",
            DeskError::SubmissionInProgress => "Wait for the current submission to settle",
            DeskError::IoError(_) => "Check that the file exists and is readable",
            DeskError::SerializationError(_) => "Check that the form payload is valid JSON",
            DeskError::ConfigError { .. }
            | DeskError::ConfigValidationError { .. }
            | DeskError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
