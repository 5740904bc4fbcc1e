use std::sync::{Arc, Mutex, MutexGuard};

use tracing::error;

use crate::{
    config::AppConfig,
    error::{ApiError, AppError},
    messages::{EnglishMessages, MessageTable},
    store::RecordStore,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    store: Arc<Mutex<RecordStore>>,
    messages: Arc<dyn MessageTable>,
}

impl AppState {
    pub fn new(config: AppConfig, store: RecordStore) -> Self {
        Self {
            config,
            store: Arc::new(Mutex::new(store)),
            messages: Arc::new(EnglishMessages),
        }
    }

    pub fn with_messages(mut self, messages: impl MessageTable + 'static) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    /// Locks the store for one operation.
    pub fn store(&self) -> Result<MutexGuard<'_, RecordStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::Other(anyhow::anyhow!("record store lock poisoned")))
    }

    /// Renders `err` for the client using the configured message table.
    pub fn reject(&self, err: impl Into<AppError>) -> ApiError {
        let err = err.into();
        let status = err.status();
        if status.is_server_error() {
            error!("request failed: {err:?}");
        }
        ApiError {
            status,
            kind: err.kind(),
            message: self.messages.render(&err),
        }
    }
}
