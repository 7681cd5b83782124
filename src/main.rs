use env_logger::Env;
use pizza_restaurants::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, sqlx statement logging only at warn
    env_logger::Builder::from_env(Env::default().default_filter_or("info,sqlx=warn")).init();

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    pizza_restaurants::run_server(&config).await
}
