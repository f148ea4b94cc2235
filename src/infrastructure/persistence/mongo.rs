use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

/// Bound on the startup probe. A database that does not answer within this
/// window is treated as unreachable and the process continues in fallback
/// mode; the probe is not retried.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[instrument(skip(url))]
pub async fn connect(url: &str, database_name: &str) -> Result<Database, RepositoryError> {
    let mut options = ClientOptions::parse(url)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);

    let client = Client::with_options(options)
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
    let database = client.database(database_name);

    database
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    info!(database = database_name, "MongoDB connection established");
    Ok(database)
}
