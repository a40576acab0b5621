use crl_server::{config::Config, server::Server, setup::setup, telemetry};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Loaded configuration: {:?}", config);

    let store = setup(&config).await?;

    let server = Server::new(store, &config.server).await?;
    server.run().await
}
