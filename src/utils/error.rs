use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Role not found: {role_id}")]
    RoleNotFound { role_id: String },

    #[error("No metadata registered for permission '{permission}'")]
    MissingMetadata { permission: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入錯誤 (角色不存在、參數缺漏)
    UserInput,
    /// 資料一致性錯誤 (權限登錄表缺資料)
    DataConsistency,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::RoleNotFound { .. } | CompareError::ValidationError { .. } => {
                ErrorCategory::UserInput
            }
            CompareError::MissingMetadata { .. } => ErrorCategory::DataConsistency,
            CompareError::ConfigValidationError { .. }
            | CompareError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CompareError::IoError(_)
            | CompareError::SerializationError(_)
            | CompareError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Medium,
            ErrorCategory::DataConsistency => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::RoleNotFound { role_id } => {
                format!("The role '{}' does not exist", role_id)
            }
            CompareError::MissingMetadata { permission } => format!(
                "Permission '{}' is granted to a role but is not defined by any module",
                permission
            ),
            CompareError::IoError(e) => format!("Could not read or write a file: {}", e),
            CompareError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::UserInput => {
                "Check the role ids; run with --list-roles to see the available roles"
            }
            ErrorCategory::DataConsistency => {
                "Add the missing permission to the [permissions] table of the site definition"
            }
            ErrorCategory::Configuration => "Fix the site definition file and try again",
            ErrorCategory::System => "Check file paths and permissions, then retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
