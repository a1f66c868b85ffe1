use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use perks_api::state::EngineDefaults;
use perks_api::{app, AppState};
use perks_catalog::{Catalog, FeedClient};
use perks_location::{LocationProvider, ReverseGeocoder};
use perks_store::saved::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perks_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = perks_store::app_config::Config::load()?;
    tracing::info!("Starting perks API on port {}", config.server.port);

    let feed = match &config.feed.url {
        Some(url) => Some(FeedClient::new(
            url.clone(),
            Duration::from_secs(config.feed.timeout_seconds),
        )?),
        None => None,
    };
    let catalog = Catalog::load(feed.as_ref()).await;

    let saved = Arc::new(JsonFileStore::new(&config.storage.saved_offers_path));
    let geocoder = Arc::new(ReverseGeocoder::new(
        config.geocoder.url.clone(),
        Duration::from_secs(config.geocoder.timeout_seconds),
    ));

    // This host has no positioning capability of its own; the UI acquires
    // coordinates on-device and sends them with its requests.
    let location = Arc::new(LocationProvider::unsupported());

    let state = AppState {
        catalog: Arc::new(catalog),
        saved,
        location,
        geocoder,
        defaults: EngineDefaults {
            radius_km: config.engine.default_radius_km,
        },
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
