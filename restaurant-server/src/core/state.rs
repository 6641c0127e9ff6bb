use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::pages::PageRenderer;

/// 服务器状态 - 持有所有共享资源
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | pages | Arc<PageRenderer> | 编译好的页面模板 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Arc<Config>,
    /// 数据库服务
    pub db: DbService,
    /// 页面模板
    pub pages: Arc<PageRenderer>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替
    pub fn new(config: Config, db: DbService, pages: PageRenderer) -> Self {
        Self {
            config: Arc::new(config),
            db,
            pages: Arc::new(pages),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 打开数据库并执行迁移 (config.database_path)
    /// 2. 加载页面模板
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        let pages = PageRenderer::new()?;
        Ok(Self::new(config.clone(), db, pages))
    }
}
