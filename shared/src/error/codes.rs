//! Unified error codes for the document generator
//!
//! This module defines all error codes used by the server and its clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Calculation errors
//! - 2xxx: Template errors
//! - 3xxx: Document errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Calculation ====================
    /// Contract amount missing or not positive
    InvalidContractAmount = 1001,
    /// Progressive customer without current investment / previously paid
    MissingProgressiveField = 1002,
    /// Customer class has no payment ratio table
    UnsupportedCustomerClass = 1003,
    /// Ratio outside 0–100 percent
    InvalidRatio = 1004,
    /// Negative or non-finite amount
    InvalidAmount = 1005,

    // ==================== 2xxx: Template ====================
    /// Template file not found
    TemplateNotFound = 2001,
    /// Template could not be rendered
    TemplateRenderFailed = 2002,
    /// Template is not a valid OOXML package
    TemplateInvalid = 2003,

    // ==================== 3xxx: Document ====================
    /// No document selected for generation
    NoDocumentsSelected = 3001,
    /// Zip packaging failed
    ArchiveFailed = 3002,
    /// Date could not be parsed
    InvalidDate = 3003,
    /// Payment terms do not add up to 100%
    PaymentTermsInvalid = 3004,
    /// No contract stored yet
    ContractNotFound = 3101,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// File system error
    FileSystemError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Calculation
            ErrorCode::InvalidContractAmount => "Contract amount must be greater than 0",
            ErrorCode::MissingProgressiveField => {
                "Current investment and previously paid amount are required"
            }
            ErrorCode::UnsupportedCustomerClass => "Customer class has no payment ratio table",
            ErrorCode::InvalidRatio => "Ratio must be between 0 and 100",
            ErrorCode::InvalidAmount => "Amount must be a non-negative finite number",

            // Template
            ErrorCode::TemplateNotFound => "Template not found",
            ErrorCode::TemplateRenderFailed => "Template rendering failed",
            ErrorCode::TemplateInvalid => "Template is not a valid document package",

            // Document
            ErrorCode::NoDocumentsSelected => "At least one document must be selected",
            ErrorCode::ArchiveFailed => "Failed to package documents",
            ErrorCode::InvalidDate => "Invalid date, expected YYYY-MM-DD",
            ErrorCode::PaymentTermsInvalid => "Payment terms total must be 100%",
            ErrorCode::ContractNotFound => "No contract information stored",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::FileSystemError => "File system error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Calculation
            1001 => Ok(ErrorCode::InvalidContractAmount),
            1002 => Ok(ErrorCode::MissingProgressiveField),
            1003 => Ok(ErrorCode::UnsupportedCustomerClass),
            1004 => Ok(ErrorCode::InvalidRatio),
            1005 => Ok(ErrorCode::InvalidAmount),

            // Template
            2001 => Ok(ErrorCode::TemplateNotFound),
            2002 => Ok(ErrorCode::TemplateRenderFailed),
            2003 => Ok(ErrorCode::TemplateInvalid),

            // Document
            3001 => Ok(ErrorCode::NoDocumentsSelected),
            3002 => Ok(ErrorCode::ArchiveFailed),
            3003 => Ok(ErrorCode::InvalidDate),
            3004 => Ok(ErrorCode::PaymentTermsInvalid),
            3101 => Ok(ErrorCode::ContractNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9006 => Ok(ErrorCode::FileSystemError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
