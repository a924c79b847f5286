use anyhow::Result;
use wanderly::{WanderlyConfig, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let config = WanderlyConfig::load()?;
    telemetry::init(&config.logging)?;
    tracing::info!("Starting Wanderly v{}", wanderly::VERSION);

    web::run(&config).await
}
