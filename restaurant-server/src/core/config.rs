/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | restaurant.db | SQLite 数据库文件 |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_FORMAT | pretty | pretty 或 json |
/// | LOG_DIR | - | 日志目录 (按天滚动) |
/// | BOOKINGS_STRICT_CONFLICT | false | 预订冲突时返回 409 |
/// | MIN_PASSWORD_LEN | 8 | 注册密码最小长度 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/lemon.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 监听地址
    pub http_host: String,
    /// HTTP 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// JSON 格式日志
    pub log_json: bool,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// `/bookings` 冲突时返回 409 而不是 200
    pub bookings_strict_conflict: bool,
    /// 注册密码最小长度
    pub min_password_len: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "restaurant.db".into()),
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            bookings_strict_conflict: lookup("BOOKINGS_STRICT_CONFLICT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_password_len: lookup("MIN_PASSWORD_LEN")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
        }
    }

    /// 使用自定义数据库路径 (常用于测试场景)
    pub fn with_database(database_path: impl Into<String>) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.database_path = database_path.into();
        config
    }

    /// 监听地址 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.database_path, "restaurant.db");
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.environment, "development");
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
        assert!(!config.bookings_strict_conflict);
        assert_eq!(config.min_password_len, 8);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HTTP_PORT", "9090"),
            ("ENVIRONMENT", "production"),
            ("LOG_FORMAT", "JSON"),
            ("BOOKINGS_STRICT_CONFLICT", "true"),
            ("MIN_PASSWORD_LEN", "12"),
        ]);
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.environment, "production");
        assert!(config.log_json);
        assert!(config.bookings_strict_conflict);
        assert_eq!(config.min_password_len, 12);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[("HTTP_PORT", "eighty"), ("BOOKINGS_STRICT_CONFLICT", "yes")]);
        assert_eq!(config.http_port, 8000);
        assert!(!config.bookings_strict_conflict);
    }
}
