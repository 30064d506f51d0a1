//! Charforge - composition root binary

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_shell::{AppConfig, Shell};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // stdout belongs to the wizard, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "charforge=info,charforge_shell=info,charforge_store=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        characters_dir = %config.characters_dir.display(),
        extension = %config.file_extension,
        "Starting Charforge"
    );

    let catalog = config.load_catalog()?;
    let store = config.store();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&catalog, &store, stdin.lock(), stdout.lock()).run()
}
