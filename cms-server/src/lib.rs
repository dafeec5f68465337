//! Restaurant CMS - 餐厅内容管理后端
//!
//! # 架构概述
//!
//! 单进程 HTTP 服务，嵌入式 SurrealDB 存储：
//!
//! - **认证** (`auth`): 管理员 / 员工两种角色的无会话登录，Argon2 哈希
//! - **菜品** (`api::menu`): 菜品增删改查，图片随表单上传
//! - **预订** (`api::reservations`): 预订提交与列表
//! - **页面** (`pages`): 登录页与仪表盘 HTML
//!
//! # 模块结构
//!
//! ```text
//! cms-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── auth/          # 角色、口令哈希、凭据校验
//! ├── db/            # 数据库、连接池、仓库
//! ├── services/      # 图片存储
//! ├── pages/         # HTML 渲染
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志初始化
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod pages;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

use tracing_appender::non_blocking::WorkerGuard;

/// 环境初始化：加载 .env，按配置初始化日志
///
/// 返回的 guard 必须持有到进程结束。
pub fn setup_environment() -> Option<WorkerGuard> {
    // .env 可选
    let dotenv = dotenv::dotenv();

    let config = Config::from_env();
    let guard = init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref());

    if let Err(e) = dotenv {
        tracing::debug!("No .env loaded: {}", e);
    }
    guard
}

pub fn print_banner() {
    println!(
        r#"
    ____            __                              __
   / __ \___  _____/ /_____ ___  ___________ _____  / /_
  / /_/ / _ \/ ___/ __/ __ `/ / / / ___/ __ `/ __ \/ __/
 / _, _/  __(__  ) /_/ /_/ / /_/ / /  / /_/ / / / / /_
/_/ |_|\___/____/\__/\__,_/\__,_/_/   \__,_/_/ /_/\__/
                 ______  ________
                / ____/ /  |/  / ___/
               / /     / /|_/ /\__ \
              / /___  / /  / /___/ /
              \____/ /_/  /_//____/
    "#
    );
}
