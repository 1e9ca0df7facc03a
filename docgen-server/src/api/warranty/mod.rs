//! Warranty API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/warranty/generate | POST | 生成质保金文档 (单个文件或 zip) |
//! | /api/warranty/document-types | GET | 文档类型列表 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/warranty", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/generate", post(handler::generate))
        .route("/document-types", get(handler::document_types))
}
