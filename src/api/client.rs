use crate::api::endpoints::Endpoint;
use crate::api::parse::{parse_flat, FlatMap};
use crate::error::{RbxStatsError, Result};
use colored::*;
use futures::StreamExt;
use serde_json::Value;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.rbxstats.xyz/api";

/// Client for the RbxStats API. Every call is one GET with the key passed as
/// the `api` query parameter.
#[derive(Clone)]
pub struct RbxStatsClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
    verbose: bool,
}

impl fmt::Debug for RbxStatsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbxStatsClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl RbxStatsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("RbxStatsClient")
            .build()
            .map_err(RbxStatsError::TransportInit)?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            verbose: false,
        })
    }

    /// Log request URL, status and body size to stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}?api={}", self.base_url, endpoint, self.api_key)
    }

    fn redacted_url(&self, endpoint: &str) -> String {
        format!("{}/{}?api=***", self.base_url, endpoint)
    }

    /// Fetch `endpoint` and scan the body with [`parse_flat`].
    ///
    /// The status code is not checked: an error page is scanned like any other body.
    pub async fn fetch(&self, endpoint: &str) -> Result<FlatMap> {
        let body = self.fetch_text(endpoint).await?;
        Ok(parse_flat(&body))
    }

    /// Fetch `endpoint` and decode the body as JSON.
    pub async fn fetch_json(&self, endpoint: &str) -> Result<Value> {
        let body = self.fetch_text(endpoint).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn fetch_text(&self, endpoint: &str) -> Result<String> {
        let display_url = self.redacted_url(endpoint);
        if self.verbose {
            eprintln!("{}", format!("[rbxstats] GET {}", display_url).dimmed());
        }

        let network_error = |source: reqwest::Error| RbxStatsError::Network {
            url: display_url.clone(),
            source,
        };

        let response = self
            .http
            .get(self.api_url(endpoint))
            .send()
            .await
            .map_err(network_error)?;

        if self.verbose {
            eprintln!(
                "{}",
                format!("[rbxstats] Status: {}", response.status()).dimmed()
            );
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk.map_err(network_error)?);
        }

        if self.verbose {
            eprintln!(
                "{}",
                format!("[rbxstats] Read {} bytes", body.len()).dimmed()
            );
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<FlatMap> {
        self.fetch(&endpoint.path()).await
    }

    pub async fn get_json(&self, endpoint: &Endpoint) -> Result<Value> {
        self.fetch_json(&endpoint.path()).await
    }

    pub async fn offsets(&self) -> Result<FlatMap> {
        self.get(&Endpoint::Offsets).await
    }

    pub async fn offset_by_name(&self, name: &str) -> Result<FlatMap> {
        self.get(&Endpoint::OffsetByName(name.to_string())).await
    }

    pub async fn offsets_by_prefix(&self, prefix: &str) -> Result<FlatMap> {
        self.get(&Endpoint::OffsetsByPrefix(prefix.to_string())).await
    }

    pub async fn offsets_camera(&self) -> Result<FlatMap> {
        self.get(&Endpoint::OffsetsCamera).await
    }

    pub async fn exploits(&self) -> Result<FlatMap> {
        self.get(&Endpoint::Exploits).await
    }

    pub async fn exploits_windows(&self) -> Result<FlatMap> {
        self.get(&Endpoint::ExploitsWindows).await
    }

    pub async fn exploits_mac(&self) -> Result<FlatMap> {
        self.get(&Endpoint::ExploitsMac).await
    }

    pub async fn exploits_undetected(&self) -> Result<FlatMap> {
        self.get(&Endpoint::ExploitsUndetected).await
    }

    pub async fn exploits_detected(&self) -> Result<FlatMap> {
        self.get(&Endpoint::ExploitsDetected).await
    }

    pub async fn exploits_free(&self) -> Result<FlatMap> {
        self.get(&Endpoint::ExploitsFree).await
    }

    pub async fn versions_latest(&self) -> Result<FlatMap> {
        self.get(&Endpoint::VersionsLatest).await
    }

    pub async fn versions_future(&self) -> Result<FlatMap> {
        self.get(&Endpoint::VersionsFuture).await
    }

    pub async fn game_by_id(&self, game_id: u64) -> Result<FlatMap> {
        self.get(&Endpoint::Game(game_id)).await
    }
}
