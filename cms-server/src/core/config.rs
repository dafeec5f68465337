use std::path::PathBuf;
use std::time::Duration;

/// Default upload limit (5 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// 初始凭据 - 仅在对应集合为空时写入
#[derive(Debug, Clone)]
pub struct SeedCredential {
    pub identifier: String,
    pub secret: String,
}

/// 服务器配置 - CMS 后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、上传文件) |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (未设置时仅输出到终端) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | DB_MAX_CONNECTIONS | 16 | 数据库并发连接上限 |
/// | DB_ACQUIRE_TIMEOUT_MS | 5000 | 获取连接超时(毫秒) |
/// | DB_QUERY_TIMEOUT_MS | 5000 | 单次查询超时(毫秒) |
/// | MAX_UPLOAD_BYTES | 5242880 | 单个图片大小上限 |
/// | ADMIN_ID / ADMIN_PASSWORD | admin / password123 (仅开发环境) | 初始管理员 |
/// | STAFF_ID / STAFF_PASSWORD | staff / password123 (仅开发环境) | 初始员工 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/cms HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和上传文件
    pub work_dir: String,
    /// 监听地址
    pub http_host: String,
    /// HTTP 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// JSON 格式日志
    pub log_json: bool,
    /// 数据库并发连接上限
    pub db_max_connections: usize,
    /// 获取连接超时 (毫秒)
    pub db_acquire_timeout_ms: u64,
    /// 单次查询超时 (毫秒)
    pub db_query_timeout_ms: u64,
    /// 上传文件大小上限 (字节)
    pub max_upload_bytes: usize,
    /// 初始管理员
    pub admin_seed: Option<SeedCredential>,
    /// 初始员工
    pub staff_seed: Option<SeedCredential>,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let production = environment == "production";

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_or("HTTP_PORT", 8080),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_json: env_or("LOG_JSON", false),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 16),
            db_acquire_timeout_ms: env_or("DB_ACQUIRE_TIMEOUT_MS", 5000),
            db_query_timeout_ms: env_or("DB_QUERY_TIMEOUT_MS", 5000),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            admin_seed: seed_from_env("ADMIN_ID", "ADMIN_PASSWORD", "admin", production),
            staff_seed: seed_from_env("STAFF_ID", "STAFF_PASSWORD", "staff", production),
            environment,
        }
    }

    /// 测试用配置：指定工作目录，其余使用开发默认值
    pub fn for_work_dir(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_host: "127.0.0.1".into(),
            http_port: 0,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            log_json: false,
            db_max_connections: 16,
            db_acquire_timeout_ms: 5000,
            db_query_timeout_ms: 5000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            admin_seed: Some(SeedCredential {
                identifier: "admin".into(),
                secret: "password123".into(),
            }),
            staff_seed: Some(SeedCredential {
                identifier: "staff".into(),
                secret: "password123".into(),
            }),
        }
    }

    /// 数据库目录: work_dir/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 数据库文件: work_dir/database/cms.db
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("cms.db")
    }

    /// 上传目录: work_dir/uploads
    pub fn uploads_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads")
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.db_acquire_timeout_ms)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.db_query_timeout_ms)
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.uploads_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Read a seed pair; development falls back to `<default_id>`/`password123`
fn seed_from_env(
    id_key: &str,
    secret_key: &str,
    default_id: &str,
    production: bool,
) -> Option<SeedCredential> {
    let identifier = std::env::var(id_key).ok().filter(|v| !v.is_empty());
    let secret = std::env::var(secret_key).ok().filter(|v| !v.is_empty());

    match (identifier, secret) {
        (Some(identifier), Some(secret)) => Some(SeedCredential { identifier, secret }),
        _ if production => None,
        (identifier, secret) => Some(SeedCredential {
            identifier: identifier.unwrap_or_else(|| default_id.to_string()),
            secret: secret.unwrap_or_else(|| "password123".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths() {
        let config = Config::for_work_dir("/srv/cms");
        assert_eq!(config.database_path(), PathBuf::from("/srv/cms/database/cms.db"));
        assert_eq!(config.uploads_dir(), PathBuf::from("/srv/cms/uploads"));
        assert_eq!(config.query_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_seeds_development_defaults() {
        let config = Config::for_work_dir("/tmp/x");
        assert_eq!(config.environment, "development");
        let admin = config.admin_seed.unwrap();
        assert_eq!(admin.identifier, "admin");
        assert_eq!(admin.secret, "password123");
    }

    #[test]
    fn ensure_structure_creates_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::for_work_dir(tmp.path().to_string_lossy());
        config.ensure_work_dir_structure().unwrap();
        assert!(config.database_dir().is_dir());
        assert!(config.uploads_dir().is_dir());
    }
}
