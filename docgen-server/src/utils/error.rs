//! 统一错误处理
//!
//! 错误类型与响应信封都来自 `shared::error`，这里只做 re-export 和成功响应的快捷构造。
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::template_not_found("payment/huawei/advance.docx"))
//!
//! // 返回成功响应
//! Ok(ok(result))
//! ```

use axum::Json;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// 成功响应 `{ "code": 0, "message": "OK", "data": ... }`
pub fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}
