use std::{path::PathBuf, sync::Arc};

use locations::{LocationStore, StoreError};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// State shared by the message handler, the autosave task and the console.
pub struct BotContext {
    pub store: LocationStore,
    pub save_path: PathBuf,
}

pub type BotContextRef = Arc<RwLock<BotContext>>;

impl BotContext {
    /// A missing or unreadable file is not fatal, the bot starts with no locations instead.
    pub fn load_or_default(save_path: PathBuf) -> BotContext {
        let store = match LocationStore::load(&save_path) {
            Ok(store) => {
                info!("loaded {} locations from {}", store.len(), save_path.display());
                store
            }
            Err(e) => {
                warn!("No saved locations found: {e}");
                LocationStore::new()
            }
        };
        BotContext { store, save_path }
    }

    pub fn into_ref(self) -> BotContextRef {
        Arc::new(RwLock::new(self))
    }

    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.save_path)
    }

    /// Replaces the in-memory locations with the file contents. On failure nothing changes.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.store = LocationStore::load(&self.save_path)?;
        Ok(())
    }
}
