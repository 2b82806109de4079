use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{message}")]
    FormError { mode: String, message: String },

    #[error("Model returned HTTP {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("Model returned no usable text: {reason}")]
    EmptyResponse { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Remote,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl StudioError {
    pub fn form(mode: impl Into<String>, message: impl Into<String>) -> Self {
        StudioError::FormError {
            mode: mode.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StudioError::FormError { .. } => ErrorCategory::Input,
            StudioError::ConfigError { .. }
            | StudioError::ConfigValidationError { .. }
            | StudioError::InvalidConfigValueError { .. }
            | StudioError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StudioError::ApiError(_)
            | StudioError::RemoteError { .. }
            | StudioError::EmptyResponse { .. } => ErrorCategory::Remote,
            StudioError::IoError(_) | StudioError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            // 表單錯誤原樣顯示
            StudioError::FormError { message, .. } => message.clone(),
            StudioError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            StudioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            StudioError::ConfigError { message }
            | StudioError::ConfigValidationError { message, .. } => {
                format!("Configuration problem: {}", message)
            }
            other => format!("An error occurred: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StudioError::FormError { .. } => "Fill in the required fields and try again",
            StudioError::MissingConfigError { .. } => {
                "Set GEMINI_API_KEY, pass --api-key, or add api_key to the [api] section"
            }
            StudioError::ConfigError { .. }
            | StudioError::ConfigValidationError { .. }
            | StudioError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags"
            }
            StudioError::ApiError(_) => "Check your network connection and the API base URL",
            StudioError::RemoteError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key is valid"
            }
            StudioError::RemoteError { .. } => "Check the model name and request parameters",
            StudioError::EmptyResponse { .. } => "Rephrase the input and try again",
            StudioError::IoError(_) | StudioError::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
