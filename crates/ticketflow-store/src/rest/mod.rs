//! REST client for the external entity store
//!
//! Speaks the store's resource contract: `/tickets`, `/auditLogs`, `/users`.
//! Network and decode failures surface as the Transport error class; the
//! client never retries on its own.

mod audit_logs;
mod tickets;
mod users;

pub use audit_logs::RestAuditLogStore;
pub use tickets::RestTicketStore;
pub use users::RestUserDirectory;

use std::time::Duration;

use ticketflow_common::StoreConfig;
use ticketflow_core::DomainError;

/// Connection settings for the external store
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RestStoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl TryFrom<&StoreConfig> for RestStoreConfig {
    type Error = DomainError;

    fn try_from(config: &StoreConfig) -> Result<Self, Self::Error> {
        let base_url = config.base_url.clone().ok_or_else(|| {
            DomainError::Internal("rest store mode requires a base URL".to_string())
        })?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

/// Shared HTTP client for the three resource stores
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Build a client for the configured store
    pub fn new(config: &RestStoreConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Map a client-side failure to the Transport error class
pub(crate) fn transport(err: impl std::fmt::Display) -> DomainError {
    DomainError::Transport(err.to_string())
}

/// Reject non-success responses, preserving the status line for the caller
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, DomainError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(DomainError::Transport(format!(
            "entity store responded {} for {}",
            response.status(),
            response.url().path()
        )))
    }
}
