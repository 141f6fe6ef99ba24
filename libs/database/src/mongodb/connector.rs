use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{error, info};

use super::{DEFAULT_DATABASE, MongoConfig};

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Parse the connection string and apply pool and timeout settings.
pub async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    let timeout = Duration::from_secs(config.timeout_secs);
    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client without talking to the server.
///
/// The driver connects lazily, so the returned client is usable even when the
/// server is down; operations then fail after the server selection timeout.
pub async fn open_client(config: &MongoConfig) -> Result<Client, MongoError> {
    let options = client_options(config).await?;
    Ok(Client::with_options(options)?)
}

/// Run a `ping` against the admin database.
pub async fn ping(client: &Client) -> Result<(), MongoError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

/// Open the long-lived client used by the whole process.
///
/// Only an unusable connection string is an error. An unreachable server is
/// logged and the client is returned anyway, so the process keeps serving and
/// individual requests fail until the server comes back.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::new("mongodb://localhost:27017/pasokari");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(url = %config.redacted_url(), "Connecting to MongoDB");

    let client = open_client(config).await?;

    match ping(&client).await {
        Ok(()) => info!("Connected to MongoDB"),
        Err(e) => error!(
            error = %e,
            timeout_secs = config.timeout_secs,
            "MongoDB unreachable, continuing in degraded mode"
        ),
    }

    Ok(client)
}

/// Pick the database: explicit config first, then the URI's default, then
/// [`DEFAULT_DATABASE`].
pub fn database_for(client: &Client, config: &MongoConfig) -> Database {
    match &config.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    }
}
