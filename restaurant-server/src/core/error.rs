use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动/运行错误
///
/// 请求级错误使用 [`AppError`]，这里只处理进程级故障。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] AppError),

    #[error("模板加载失败: {0}")]
    Template(#[from] tera::Error),

    #[error("监听 {addr} 失败: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
