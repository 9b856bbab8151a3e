use crate::app_config::{AppConfig, SourceConfig};
use crate::domain::PositionReading;
use crate::placement::{LogScene, Placer, Scene};
use crate::position::{FixedSource, Geolocator, PositionOptions, PositionSource, TrackError, TrackSource};
use futures::StreamExt;
use reqwest::Client;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, instrument, warn};

mod app_config;
mod domain;
mod geo_coordinate_deserializer;
mod geodesy;
mod placement;
mod position;
mod recorder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration, {} anchor(s)", config.anchors().len());

    let source = new_source(config.position().source()).await?;
    info!("✅  Initialized '{}' position source", source.id());

    let client = if config.recorder().enabled() { Some(recorder::new_client(&config)?) } else { None };

    let geolocator = Geolocator::new(source);
    let mut placer = Placer::new(config.anchors().to_vec(), config.placement().policy(), config.placement().visibility_radius_m());
    let mut scene = LogScene::new();
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("⚠️ Unable to listen for Ctrl-C: {}", e);
        }
    };
    track_anchors(&geolocator, &config, client.as_ref(), &mut placer, &mut scene, shutdown).await;
    info!("👋 Stopped with {} anchor(s) in view", scene.visible_count());

    Ok(())
}

async fn new_source(config: &SourceConfig) -> Result<Arc<dyn PositionSource>, TrackError> {
    let source: Arc<dyn PositionSource> = match config {
        SourceConfig::Fixed { location, accuracy_m } => Arc::new(FixedSource::new(*location, *accuracy_m)),
        SourceConfig::Track { file, repeat } => Arc::new(TrackSource::load(file, *repeat).await?),
    };
    Ok(source)
}

/// Places the current position, recording it first when a client is given, then places every
/// watched reading until the source ends or `shutdown` completes.
async fn track_anchors(
    geolocator: &Geolocator,
    config: &AppConfig,
    client: Option<&Client>,
    placer: &mut Placer,
    scene: &mut impl Scene,
    shutdown: impl Future<Output = ()>,
) {
    let options = config.position().options();

    if let Some(reading) = current_position(geolocator, &options).await {
        if let Some(client) = client {
            record(client, config, &reading).await;
        }
        place_anchors(placer, scene, &reading);
    }

    let mut watch = geolocator.watch(options, config.position().interval(), config.core().watch_buffer_size());
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            update = watch.next() => match update {
                Some(Ok(reading)) => place_anchors(placer, scene, &reading),
                Some(Err(e)) => warn!("⚠️ Geolocation error: {}", e),
                None => {
                    info!("🛰️ Position updates ended");
                    break;
                }
            },
            _ = &mut shutdown => {
                info!("🛑 Shutting down");
                break;
            }
        }
    }

    watch.unsubscribe();
}

async fn current_position(geolocator: &Geolocator, options: &PositionOptions) -> Option<PositionReading> {
    geolocator
        .current_position(options)
        .await
        .inspect_err(|e| warn!("⚠️ Unable to retrieve location: {}", e))
        .ok()
}

#[instrument(skip_all)]
async fn record(client: &Client, config: &AppConfig, reading: &PositionReading) {
    if let Err(e) = recorder::record_location(client, config, reading).await {
        warn!("⚠️ Unable to record location: {}", e);
    }
}

fn place_anchors(placer: &mut Placer, scene: &mut impl Scene, reading: &PositionReading) {
    match placer.update(&reading.coordinate) {
        Ok(placements) => placements.iter().for_each(|placement| scene.place(placement)),
        Err(e) => warn!(accuracy_m = reading.accuracy_m, "⚠️ Unable to place anchors: {}", e),
    }
}
