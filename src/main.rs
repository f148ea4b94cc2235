use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use narvik::application::ports::{AudioRepository, RepositoryError};
use narvik::application::services::AudioService;
use narvik::domain::sample_records;
use narvik::infrastructure::observability::{init_tracing, TracingConfig};
use narvik::infrastructure::persistence::{connect, MemoryAudioRepository, MongoAudioRepository};
use narvik::presentation::{create_router, AppState, DatabaseSettings, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    // The fallback map is seeded unconditionally so it can take over at any
    // point, even mid-flight when the primary starts erroring.
    let fallback: Arc<dyn AudioRepository> =
        Arc::new(MemoryAudioRepository::with_records(sample_records()));

    let primary = connect_primary(&settings.database).await;
    let audio_service = Arc::new(AudioService::new(primary, fallback));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let state = AppState {
        audio_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Startup probe: connect with a bounded timeout, ensure the unique language
/// index and seed the collection when empty. Any failure here leaves the
/// service in fallback mode; the probe is not retried.
async fn connect_primary(database: &DatabaseSettings) -> Option<Arc<dyn AudioRepository>> {
    let db = match connect(&database.url, &database.name).await {
        Ok(db) => db,
        Err(e) => {
            tracing::warn!(error = %e, "MongoDB unreachable, running in fallback mode");
            return None;
        }
    };

    let repository = MongoAudioRepository::new(&db);
    match bootstrap_primary(&repository).await {
        Ok(()) => Some(Arc::new(repository)),
        Err(e) => {
            tracing::warn!(error = %e, "MongoDB bootstrap failed, running in fallback mode");
            None
        }
    }
}

async fn bootstrap_primary(repository: &MongoAudioRepository) -> Result<(), RepositoryError> {
    repository.ensure_language_index().await?;
    if repository.seed_if_empty(&sample_records()).await? {
        tracing::info!("Seeded primary store with sample audio records");
    }
    Ok(())
}
