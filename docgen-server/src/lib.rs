//! Docgen Server - 合同付款 / 保函 / 质保金文档生成服务
//!
//! # 架构概述
//!
//! - **金额计算** (`calc`): 付款比例表、付款与保函金额、人民币大写
//! - **文档生成** (`documents`): 模板目录、模板变量、OOXML 渲染、zip 打包
//! - **合同存储** (`store`): 当前合同
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! docgen-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── calc/          # 金额计算 (纯函数)
//! ├── documents/     # 模板与渲染
//! ├── store/         # 合同存储
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误、日志、校验、日期
//! ```

pub mod api;
pub mod calc;
pub mod core;
pub mod documents;
pub mod middleware;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use calc::{CalcError, RatioTable, compute_payment, to_chinese_currency_words};
pub use core::{Config, Server, ServerState, build_router};
pub use documents::{OoxmlRenderer, TemplateRenderer, TemplateStore};
pub use store::{ContractStore, InMemoryContractStore};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 .env 并按配置初始化日志，返回配置
pub fn setup_environment() -> Config {
    // .env 可选
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref().and_then(|p| p.to_str()),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____                                
   / __ \____  _________ ____  ____     
  / / / / __ \/ ___/ __ `/ _ \/ __ \    
 / /_/ / /_/ / /__/ /_/ /  __/ / / /    
/_____/\____/\___/\__, /\___/_/ /_/     
                 /____/                 
    "#
    );
}
