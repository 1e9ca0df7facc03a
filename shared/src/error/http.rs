//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::TemplateNotFound | Self::ContractNotFound => {
                StatusCode::NOT_FOUND
            }

            // 500 Internal Server Error
            Self::InternalError
            | Self::FileSystemError
            | Self::TemplateRenderFailed
            | Self::TemplateInvalid
            | Self::ArchiveFailed
            | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation / calculation input)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
