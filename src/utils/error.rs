use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Failed to decode API response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("API error: {status}")]
    ApiStatusError {
        status: String,
        message: Option<String>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Malformed input: {reason}")]
    MalformedInput { row: Option<usize>, reason: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Setup,
    Input,
    Lookup,
    Storage,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 單筆查詢失敗，可以繼續
    Medium,
    /// 處理錯誤
    High,
    /// 設定或環境錯誤
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::UrlError(_) => ErrorCategory::Setup,
            EtlError::MalformedInput { .. } | EtlError::CsvError(_) => ErrorCategory::Input,
            EtlError::NetworkError(_)
            | EtlError::DecodeError(_)
            | EtlError::ApiStatusError { .. } => ErrorCategory::Lookup,
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Storage | ErrorCategory::Processing => {
                ErrorSeverity::High
            }
            ErrorCategory::Setup => ErrorSeverity::Critical,
        }
    }

    /// Lookup failures only cost a single row; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Lookup
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::MissingConfigError { field } if field == "api_key" => {
                "Set GOOGLE_API_KEY or pass --api-key".to_string()
            }
            EtlError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Check the value given for '{}'", field)
            }
            EtlError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            EtlError::UrlError(_) => "Check --api-endpoint is a valid http(s) URL".to_string(),
            EtlError::MalformedInput { row: Some(row), .. } => format!(
                "Row {} needs at least 7 columns: site code, site name, destination lat, destination lng, terminal code, origin lat, origin lng",
                row
            ),
            EtlError::MalformedInput { row: None, .. } => {
                "The input file needs a header row followed by at least one data row".to_string()
            }
            EtlError::CsvError(_) => "Make sure the input file is valid comma-separated text".to_string(),
            EtlError::IoError(_) => {
                "Check that the input file exists and the output location is writable".to_string()
            }
            EtlError::NetworkError(_) => "Check network connectivity to the API endpoint".to_string(),
            EtlError::DecodeError(_) => {
                "The endpoint did not return a distance matrix response".to_string()
            }
            EtlError::ApiStatusError { .. } => {
                "Check the API key and that the Distance Matrix API is enabled".to_string()
            }
            EtlError::ProcessingError { .. } => "Re-run the job; this indicates a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::ApiStatusError {
                status,
                message: Some(message),
            } => format!("API error: {} ({})", status, message),
            _ => self.to_string(),
        }
    }
}
