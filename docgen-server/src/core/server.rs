//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use http::header::{CONTENT_DISPOSITION, HeaderValue};
use http::{HeaderName, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::{Config, Result, ServerState};
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    let allow_origin = if origins.is_empty() || config.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([CONTENT_DISPOSITION])
}

/// 构建带中间件和状态的完整应用
///
/// HTTP 服务器和集成测试共用
pub fn build_router(state: ServerState) -> Router {
    let config = state.config.clone();

    api::build_app()
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(cors_layer(&config))
        .layer(CompressionLayer::new())
        // Request logging - reads x-request-id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config),
        };

        let app = build_router(state);
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(addr = %addr, "📄 Docgen server listening");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let mut server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tokio::select! {
            result = &mut server => {
                return match result {
                    Ok(serve) => serve.map_err(Into::into),
                    Err(e) => Err(crate::core::ServerError::Internal(e.into())),
                };
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down...");
            }
        }

        let _ = shutdown_tx.send(());
        match tokio::time::timeout(self.config.shutdown_timeout(), server).await {
            Ok(Ok(serve)) => serve?,
            Ok(Err(e)) => return Err(crate::core::ServerError::Internal(e.into())),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.shutdown_timeout_ms,
                    "Graceful shutdown timed out, in-flight requests dropped"
                );
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
