//! Application context - Explicit store wiring.
//!
//! All stores are constructed here, once, against a shared storage backend
//! and a shared notifier; components receive what they need by reference
//! instead of looking anything up ambiently.

use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::core::{CartStore, Notifier, SessionStore};
use crate::errors::Result;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;
use tracing::info;

/// The wired-up storefront core.
pub struct App {
    pub config: AppConfig,
    pub notifier: Arc<Notifier>,
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub session: SessionStore,
}

impl App {
    /// Builds the context against file-backed storage in the configured data
    /// directory, restoring (or seeding) each store's persisted state.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn init(config: AppConfig) -> Result<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir)?);
        info!(data_dir = %config.data_dir.display(), "storage initialized");
        Ok(Self::with_storage(config, storage))
    }

    /// Builds the context against in-memory storage; nothing survives the
    /// process. Used by tests and ephemeral runs.
    #[must_use]
    pub fn ephemeral(config: AppConfig) -> Self {
        Self::with_storage(config, Arc::new(MemoryStore::new()))
    }

    fn with_storage(config: AppConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let notifier = Arc::new(Notifier::new());
        let catalog = CatalogStore::load(Arc::clone(&storage));
        let cart = CartStore::load(Arc::clone(&storage));
        let session = SessionStore::load(storage, Arc::clone(&notifier), config.network_delay);
        App {
            config,
            notifier,
            catalog,
            cart,
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::routes::{Access, Route};

    #[tokio::test]
    async fn test_storefront_flow_end_to_end() {
        let mut app = App::ephemeral(AppConfig {
            network_delay: std::time::Duration::ZERO,
            ..AppConfig::default()
        });

        // Fresh run seeds the catalog.
        assert_eq!(app.catalog.list().len(), 20);

        // Browse a derived view and add the first featured product.
        let featured = app.catalog.featured();
        let product = &featured[0];
        app.cart.add(product, 2, None, None);
        assert_eq!(app.cart.item_count(), 2);

        // Anonymous visitors cannot see the admin panel.
        let route = Route::parse("/admin/products");
        assert_eq!(
            Access::check(&route, app.session.current()),
            Access::RedirectToLogin
        );

        // After the demo admin logs in, the gate opens.
        app.session.login("admin@example.com", "password").await.unwrap();
        assert_eq!(
            Access::check(&route, app.session.current()),
            Access::Granted
        );

        // Checkout clears the cart.
        let summary = app.cart.checkout();
        assert!(summary.total > 0.0);
        assert_eq!(app.cart.item_count(), 0);
    }

    #[test]
    fn test_init_restores_state_across_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let mut app = App::init(config.clone()).unwrap();
        let product = app.catalog.list()[0].clone();
        app.cart.add(&product, 1, None, None);

        let reloaded = App::init(config).unwrap();
        assert_eq!(reloaded.catalog.list(), app.catalog.list());
        assert_eq!(reloaded.cart.lines(), app.cart.lines());
    }
}
