//! Contract API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/contract | POST | 校验并创建合同记录 (不保存) |
//! | /api/contract/save | POST | 保存为当前合同 |
//! | /api/contract/current | GET | 获取当前合同 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/contract", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/save", post(handler::save))
        .route("/current", get(handler::current))
}
