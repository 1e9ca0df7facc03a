//! Payment API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/payment/calculate | POST | 计算付款金额 |
//! | /api/payment/generate | POST | 生成付款申请 (.docx) |
//! | /api/payment/types | GET | 付款类型列表 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payment", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/calculate", post(handler::calculate))
        .route("/generate", post(handler::generate))
        .route("/types", get(handler::types))
}
