//! Runtime identity sources.
//!
//! The root endpoint reports which machine and which cloud served a request.
//! Both values are looked up on every call; nothing is cached.

use crate::config::{CLOUD_PROVIDER_ENV, DEFAULT_CLOUD_PROVIDER};

/// Where the root endpoint gets its hostname and cloud label from.
pub trait IdentitySource: Send + Sync {
    /// Hostname of the instance serving the request. Empty if unknown.
    fn hostname(&self) -> String;

    /// Cloud provider label for this deployment.
    fn cloud_provider(&self) -> String;
}

/// Reads the operating system hostname and the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl IdentitySource for SystemIdentity {
    fn hostname(&self) -> String {
        gethostname::gethostname().to_string_lossy().into_owned()
    }

    fn cloud_provider(&self) -> String {
        cloud_provider_from(std::env::var(CLOUD_PROVIDER_ENV).ok())
    }
}

/// Fixed identity values.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    pub hostname: String,
    pub cloud_provider: String,
}

impl StaticIdentity {
    pub fn new(hostname: impl Into<String>, cloud_provider: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            cloud_provider: cloud_provider.into(),
        }
    }
}

impl IdentitySource for StaticIdentity {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn cloud_provider(&self) -> String {
        self.cloud_provider.clone()
    }
}

/// Unset, empty, and non-UTF-8 values all fall back to the default label.
fn cloud_provider_from(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_CLOUD_PROVIDER.to_string(),
    }
}
