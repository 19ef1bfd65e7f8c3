use blog_server::infrastructure::config::AppConfig;
use blog_server::infrastructure::logging::init_logging;
use blog_server::server::{build_post_service, start_rest_server};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let post_service = build_post_service(&config);

    let (server, _addrs) = start_rest_server(&config, post_service)?;
    server.await?;

    info!("HTTP server stopped");
    Ok(())
}
