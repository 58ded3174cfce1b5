use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog::{config::Config, db, domain::DomainError};

#[tokio::main]
async fn main() -> Result<(), DomainError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting catalog v{} (profile: {})",
        env!("CARGO_PKG_VERSION"),
        config.profile
    );

    db::init_db(&config.database_url).await?;

    Ok(())
}
