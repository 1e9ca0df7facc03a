//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Calculation errors
/// - 2xxx: Template errors
/// - 3xxx: Document errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Amount / ratio calculation errors (1xxx)
    Calculation,
    /// Template lookup and rendering errors (2xxx)
    Template,
    /// Document generation and contract storage errors (3xxx-8xxx)
    Document,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Calculation,
            2000..3000 => Self::Template,
            3000..9000 => Self::Document,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Calculation => "calculation",
            Self::Template => "template",
            Self::Document => "document",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Calculation);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Template);
        assert_eq!(ErrorCategory::from_code(3101), ErrorCategory::Document);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::InvalidContractAmount.category(),
            ErrorCategory::Calculation
        );
        assert_eq!(
            ErrorCode::TemplateNotFound.category(),
            ErrorCategory::Template
        );
        assert_eq!(
            ErrorCode::ContractNotFound.category(),
            ErrorCategory::Document
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Calculation).unwrap();
        assert_eq!(json, "\"calculation\"");

        let category: ErrorCategory = serde_json::from_str("\"template\"").unwrap();
        assert_eq!(category, ErrorCategory::Template);
        assert_eq!(category.name(), "template");
    }
}
