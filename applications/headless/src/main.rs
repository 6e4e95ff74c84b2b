/// Cadence Headless - plays a catalog track against a simulated widget
use cadence_headless::{session, HostConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = HostConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        play_seconds = config.session.play_seconds,
        interval_ms = config.store.progress_interval_ms,
        "Starting headless session"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let snapshot = session::run(&config, shutdown).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
