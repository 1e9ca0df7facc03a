//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`payment`] - 付款申请计算与生成
//! - [`guarantee`] - 保函申请计算与生成
//! - [`warranty`] - 质保金文档生成
//! - [`contract`] - 当前合同信息

pub mod download;

pub mod contract;
pub mod guarantee;
pub mod health;
pub mod payment;
pub mod warranty;

use axum::Router;
use axum::http::Uri;
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppError;

// Re-export common types for handlers
pub use crate::utils::{AppResult, ok};

/// 下拉选项 `{ value, label }`
#[derive(Debug, Clone, Serialize)]
pub struct TypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// 注册全部路由 (不含中间件和状态)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(payment::router())
        .merge(guarantee::router())
        .merge(warranty::router())
        .merge(contract::router())
        .fallback(fallback)
}

/// 未知路由 → 404 (统一响应格式)
async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
