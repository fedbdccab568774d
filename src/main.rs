use dotenvy::dotenv;
use shopcart::app::App;
use shopcart::config::AppConfig;
use shopcart::core::spawn_auto_close;
use shopcart::errors::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();

    // 3. Load the application configuration
    let config = AppConfig::load()?;
    let toast_auto_close = config.toast_auto_close;

    // 4. Wire the stores against the configured data directory
    let app = App::init(config)?;
    info!(
        products = app.catalog.list().len(),
        cart_items = app.cart.item_count(),
        session = app.session.current().map_or("anonymous", |p| p.email.as_str()),
        "storefront core ready"
    );

    // 5. Run the toast auto-close driver until shutdown
    let driver = spawn_auto_close(Arc::clone(&app.notifier), toast_auto_close);

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    driver.abort();

    Ok(())
}
