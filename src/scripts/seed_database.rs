use anyhow::Context;
use env_logger::Env;
use log::info;
use pizza_restaurants::config::AppConfig;
use pizza_restaurants::seed::load_seed_data;
use pizza_restaurants::store::PostgresStore;

/// Create the tables and load sample data into the configured PostgreSQL database
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info,sqlx=warn")).init();

    let config = AppConfig::load()?;
    let database_url = config.database_url();

    info!("Connecting to PostgreSQL...");
    let store = PostgresStore::new(&database_url, config.database.max_connections)
        .await
        .context("Could not connect to the database")?;

    store.migrate().await?;
    load_seed_data(&store).await?;

    info!("Seeding complete");
    Ok(())
}
