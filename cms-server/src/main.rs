use anyhow::Context;
use cms_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    let _log_guard = setup_environment();

    // 打印横幅
    print_banner();

    tracing::info!("🍽️  Restaurant CMS starting...");

    // 2. 加载配置
    let config = Config::from_env();
    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Configuration loaded"
    );

    // 3. 初始化服务器状态 (目录、数据库、初始凭据)
    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
