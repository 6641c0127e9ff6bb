//! Little Lemon 餐厅服务器
//!
//! # 架构概述
//!
//! - **页面** (`pages`): 服务端渲染的 HTML 页面和预订表单
//! - **预订** (`reservations`): 时段冲突规则
//! - **数据库** (`db`): 嵌入式 SQLite (sqlx)
//! - **认证** (`auth`): 数据库令牌 + Argon2 密码
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 令牌认证、登录
//! ├── api/           # JSON 路由和处理器
//! ├── pages/         # HTML 页面
//! ├── reservations/  # 预订冲突规则
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由装配
//! ├── utils/         # 提取器、校验、日志
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod pages;
pub mod reservations;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use pages::PageRenderer;
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 .env、读取配置、初始化日志
pub fn setup_environment() -> Config {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    __    _ __  __  __        __
   / /   (_) /_/ /_/ /__     / /   ___  ____ ___  ____  ____
  / /   / / __/ __/ / _ \   / /   / _ \/ __ `__ \/ __ \/ __ \
 / /___/ / /_/ /_/ /  __/  / /___/  __/ / / / / / /_/ / / / /
/_____/_/\__/\__/_/\___/  /_____/\___/_/ /_/ /_/\____/_/ /_/
    "#
    );
}
