//! Test helpers for integration tests
//!
//! Builds the application over an in-memory roster repository, either as a
//! `Router` driven with `tower::ServiceExt::oneshot` or behind a real socket.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use axum::Router;
use reqwest::{Client, Response, StatusCode};
use roster_api::{create_app, AppState};
use roster_cache::{MemoryRosterRepository, StaticSnapshotProvider};
use roster_common::AppConfig;
use roster_core::{Member, RosterRepository, SnapshotProvider};
use roster_service::ServiceContextBuilder;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Upper bound on response bodies read by the helpers
const BODY_LIMIT: usize = 4 * 1024 * 1024;

/// Configuration that needs no environment
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "SNAPSHOT_PATH" => Some("roster.json".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Application state over the given collaborators
pub async fn build_state(
    repo: Arc<dyn RosterRepository>,
    provider: Arc<dyn SnapshotProvider>,
) -> Result<AppState> {
    let config = test_config()?;
    let context = ServiceContextBuilder::new()
        .engine_config(config.engine.clone())
        .roster_repo(repo)
        .snapshot_provider(provider)
        .build()
        .await
        .map_err(|e| anyhow::anyhow!("Service context error: {e}"))?;

    Ok(AppState::new(context, config))
}

/// Router serving `members` from a static snapshot
pub async fn test_app(members: Vec<Member>) -> Result<Router> {
    let state = build_state(
        Arc::new(MemoryRosterRepository::new()),
        Arc::new(StaticSnapshotProvider::new(members)),
    )
    .await?;
    Ok(create_app(state))
}

/// Send one request through the router; returns the status and JSON body
/// (`Value::Null` for an empty body)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body)?).await?;
    let status = StatusCode::from_u16(response.status().as_u16())?;
    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

pub async fn get(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    send(app, Method::GET, uri, None).await
}

/// Test server instance bound to an ephemeral local port
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the given state on 127.0.0.1
    pub async fn start(state: AppState) -> Result<Self> {
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    pub async fn post(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).json(body).send().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
