use crate::auth::CredentialChecker;
use crate::core::{Config, Result};
use crate::db::{DbPool, DbService, seed};
use crate::services::ImageStore;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是浅拷贝 (内部为 Arc / 数据库句柄)，可随请求克隆。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | DbPool | 数据库连接池 |
/// | images | ImageStore | 上传图片目录 |
/// | credentials | CredentialChecker | 登录校验 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库连接池
    pub pool: DbPool,
    /// 上传图片存储
    pub images: ImageStore,
    /// 凭据校验
    pub credentials: CredentialChecker,
}

impl ServerState {
    /// 用已打开的数据库构造状态
    pub fn new(config: Config, db: DbService) -> Self {
        let pool = DbPool::new(
            db.db,
            config.db_max_connections,
            config.acquire_timeout(),
            config.query_timeout(),
        );
        let images = ImageStore::new(config.uploads_dir(), config.max_upload_bytes);
        let credentials = CredentialChecker::new(pool.clone());
        Self {
            config,
            pool,
            images,
            credentials,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (database/, uploads/)
    /// 2. 数据库 (work_dir/database/cms.db)
    /// 3. 初始凭据
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db = DbService::open(&config.database_path()).await?;
        let state = Self::new(config.clone(), db);
        state.seed().await?;
        Ok(state)
    }

    /// 内存数据库状态，用于测试
    pub async fn in_memory(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db = DbService::memory().await?;
        let state = Self::new(config.clone(), db);
        state.seed().await?;
        Ok(state)
    }

    async fn seed(&self) -> Result<()> {
        seed::seed_credentials(
            &self.pool,
            self.config.admin_seed.as_ref(),
            self.config.staff_seed.as_ref(),
        )
        .await?;
        Ok(())
    }
}
