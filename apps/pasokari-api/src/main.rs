use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_notifications::EmailNotifier;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // A local .env is optional; real deployments set the environment directly
    dotenvy::dotenv().ok();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // An unreachable server is logged and tolerated; a bad URI is fatal
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = database::mongodb::database_for(&mongo_client, &config.mongodb);
    info!(database = %db.name(), "Using MongoDB database");

    api::products::init_indexes(&db).await;

    let notifier = EmailNotifier::from_config(&config.email)?;
    info!(
        transport = notifier.provider_name(),
        to = %config.email.to_email,
        "Inquiry notifications enabled"
    );
    // A bad mail setup is logged; inquiries are still stored
    notifier.verify_transport().await;

    let state = AppState {
        config,
        mongo_client,
        db,
        notifier,
    };

    let router = api::build_router(&state);

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Pasokari API shutdown complete");
    Ok(())
}
