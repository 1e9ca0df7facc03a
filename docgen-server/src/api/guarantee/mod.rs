//! Guarantee API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/guarantee/calculate | POST | 计算保函金额 |
//! | /api/guarantee/generate | POST | 生成保函申请 (.docx) |
//! | /api/guarantee/types | GET | 保函类型列表 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/guarantee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/calculate", post(handler::calculate))
        .route("/generate", post(handler::generate))
        .route("/types", get(handler::types))
}
