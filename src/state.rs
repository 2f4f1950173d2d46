//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::identity::{IdentitySource, SystemIdentity};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the loaded configuration and the source the root endpoint reads
/// hostname and cloud provider from. Neither is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<dyn IdentitySource>,
}

impl AppState {
    /// Creates state that reports the real host and process environment.
    pub fn new(config: AppConfig) -> Self {
        Self::with_identity(config, SystemIdentity)
    }

    pub fn with_identity(config: AppConfig, identity: impl IdentitySource + 'static) -> Self {
        Self {
            config: Arc::new(config),
            identity: Arc::new(identity),
        }
    }
}
