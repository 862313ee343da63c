// Orchestrator HTTP client
//
// Wraps `reqwest::Client` with orchestrator-specific URL construction,
// bearer-token auth, and error-body decoding. All endpoint methods return
// decoded payloads; error responses are mapped to typed `Error` variants
// before the caller sees them.

use std::collections::HashMap;

use indexmap::IndexMap;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ErrorBody, GatewayRecord, SubscriberStateRecord};
use crate::transport::TransportConfig;

/// Async client for the Magma orchestrator REST API, scoped to one network.
///
/// Covers the narrow surface the gateway console consumes: gateway listing
/// and mutation, the tier catalog, and subscriber state.
pub struct OrchestratorClient {
    http: reqwest::Client,
    base_url: Url,
    network: String,
    token: SecretString,
}

impl OrchestratorClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the orchestrator API root (e.g. `https://orc8r:9443`);
    /// the `/magma/v1` prefix is applied internally.
    pub fn new(
        base_url: Url,
        network: String,
        token: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            network,
            token,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (tests).
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        network: String,
        token: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            network,
            token,
        }
    }

    /// The network this client is scoped to.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// The orchestrator base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/magma/v1/lte/{network}/{path}` — LTE-scoped endpoints.
    fn lte_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/magma/v1/lte/{}/{path}", self.network);
        Url::parse(&full).map_err(|_| Error::InvalidUrl(full))
    }

    /// `{base}/magma/v1/networks/{network}/{path}` — network-scoped endpoints.
    fn network_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/magma/v1/networks/{}/{path}", self.network);
        Url::parse(&full).map_err(|_| Error::InvalidUrl(full))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON payload.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    /// Send a PUT with a JSON body; writes return no payload.
    async fn put(&self, url: Url, body: &(impl Serialize + Sync)) -> Result<(), Error> {
        debug!("PUT {}", url);
        let resp = self
            .http
            .put(url)
            .bearer_auth(self.token.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await
    }

    /// Send a DELETE; writes return no payload.
    async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);
        let resp = self
            .http
            .delete(url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await
    }

    /// Map an error response to a typed `Error`, or decode the JSON body.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::map_error_status(resp).await?;
        let bytes = resp.bytes().await.map_err(Error::Transport)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Map an error response to a typed `Error`, discarding any body.
    async fn check_status(resp: reqwest::Response) -> Result<(), Error> {
        Self::map_error_status(resp).await.map(|_| ())
    }

    async fn map_error_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let path = resp.url().path().to_owned();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(Error::Authentication {
                message: "token rejected by orchestrator".into(),
            });
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound { path });
        }

        // Obsidian handlers return `{"message": "..."}` on failure.
        let message = match resp.bytes().await {
            Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|b| b.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned()),
            Err(_) => String::new(),
        };
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    // ── Gateways ─────────────────────────────────────────────────────

    /// List all gateways for the network, keyed by gateway id.
    ///
    /// An `IndexMap` preserves the response's document order, which is the
    /// order downstream row projection follows.
    pub async fn list_gateways(&self) -> Result<IndexMap<String, GatewayRecord>, Error> {
        let url = self.lte_url("gateways")?;
        self.get(url).await
    }

    /// Fetch a single gateway by id.
    pub async fn get_gateway(&self, gateway_id: &str) -> Result<GatewayRecord, Error> {
        let url = self.lte_url(&format!("gateways/{gateway_id}"))?;
        self.get(url).await
    }

    /// Assign a gateway to a software tier.
    pub async fn update_gateway_tier(&self, gateway_id: &str, tier_id: &str) -> Result<(), Error> {
        let url = self.lte_url(&format!("gateways/{gateway_id}/tier"))?;
        self.put(url, &tier_id).await
    }

    /// Remove a gateway from the network.
    pub async fn remove_gateway(&self, gateway_id: &str) -> Result<(), Error> {
        let url = self.lte_url(&format!("gateways/{gateway_id}"))?;
        self.delete(url).await
    }

    // ── Tiers ────────────────────────────────────────────────────────

    /// List the network's tier ids.
    pub async fn list_tiers(&self) -> Result<Vec<String>, Error> {
        let url = self.network_url("tiers")?;
        self.get(url).await
    }

    // ── Subscriber state ─────────────────────────────────────────────

    /// Fetch per-subscriber reported state, keyed by IMSI.
    pub async fn list_subscriber_state(
        &self,
    ) -> Result<HashMap<String, SubscriberStateRecord>, Error> {
        let url = self.lte_url("subscriber_state")?;
        self.get(url).await
    }
}
