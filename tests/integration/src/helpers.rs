//! Test helpers for integration tests
//!
//! Provides utilities for spawning in-process test servers and making HTTP
//! requests against them.

use std::net::SocketAddr;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use ticketflow_api::{create_app, create_app_state};
use ticketflow_common::{
    AppConfig, AppSettings, CorsConfig, Environment, RateLimitConfig, ServerConfig, StoreConfig,
    StoreMode,
};

use crate::fixtures::Actor;

/// Configuration for test servers: in-memory store, rate limits wide open so
/// test bursts never trip them
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "ticketflow-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        store: StoreConfig {
            mode: StoreMode::Memory,
            base_url: None,
            timeout_secs: 5,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 10_000,
            burst: 10_000,
        },
        cors: CorsConfig::default(),
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config)?;
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            client: Client::new(),
            _handle: handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET without actor headers
    pub async fn get_anonymous(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// GET as the given actor
    pub async fn get(&self, path: &str, actor: &Actor) -> Result<Response> {
        Ok(actor
            .apply(self.client.get(self.url(path)))
            .send()
            .await?)
    }

    /// POST a JSON body as the given actor
    pub async fn post<B: Serialize>(&self, path: &str, actor: &Actor, body: &B) -> Result<Response> {
        Ok(actor
            .apply(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?)
    }

    /// POST without actor headers
    pub async fn post_anonymous<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }
}

/// Assert the response status, returning the body text on mismatch
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("expected {expected}, got {status}: {body}");
    }
    Ok(())
}

/// Assert the status and deserialize the JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected {
        anyhow::bail!("expected {expected}, got {status}: {body}");
    }
    Ok(serde_json::from_str(&body)?)
}
