//! Store wiring: one long-lived store handle built at startup and passed
//! to handlers explicitly (no ambient globals).

use std::sync::Arc;

use bookshelf_store::{CartStore, CatalogStore, MemoryStore, PgStore, StoreError};

use crate::config::ApiConfig;

/// Shared service handles for request handlers.
pub struct AppServices {
    pub catalog: Arc<dyn CatalogStore>,
    pub cart: Arc<dyn CartStore>,
}

/// Build the store backend selected by configuration.
///
/// Persistent mode requires `DB_USER`/`DB_PASS`; otherwise the in-memory
/// store is used (dev/test), seeded with the navigation categories the
/// external store would normally hold.
pub async fn build_services(cfg: &ApiConfig) -> Result<AppServices, StoreError> {
    if cfg.use_persistent_store {
        let url = cfg.database_url.as_deref().ok_or_else(|| {
            StoreError::Unavailable(
                "USE_PERSISTENT_STORE is set but DB_USER/DB_PASS are not".to_string(),
            )
        })?;

        let store = PgStore::connect(url).await?;
        store.ensure_schema().await?;
        let store = Arc::new(store);

        tracing::info!("using persistent document store");
        return Ok(AppServices {
            catalog: store.clone(),
            cart: store,
        });
    }

    let store = Arc::new(MemoryStore::new());
    for name in ["Novel", "History", "Thriller", "Drama", "Sci-Fi"] {
        store.add_category(name)?;
    }

    tracing::info!("using in-memory document store");
    Ok(AppServices {
        catalog: store.clone(),
        cart: store,
    })
}
