use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::store::{Catalog, Storefront};

/// Shared handle to the session state. The mutex serializes every store
/// behind one writer, so handlers run their contract to completion in turn.
#[derive(Clone)]
pub struct AppState {
    storefront: Arc<Mutex<Storefront>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            storefront: Arc::new(Mutex::new(Storefront::new(catalog))),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Storefront> {
        self.storefront.lock().await
    }
}
