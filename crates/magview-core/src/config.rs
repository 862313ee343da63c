// ── Orchestrator connection configuration ──

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use magview_api::TransportConfig;

/// TLS verification policy for the orchestrator connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsVerification {
    #[default]
    SystemDefaults,
    /// Accept self-signed certificates. Lab use only.
    DangerAcceptInvalid,
}

/// Everything needed to talk to one orchestrator network.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Orchestrator API root, e.g. `https://orc8r.example:9443`.
    pub url: Url,
    /// Network id the console is scoped to.
    pub network: String,
    /// Bearer token for the REST API.
    pub token: SecretString,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl OrchestratorConfig {
    /// Derive the transport settings for the HTTP client.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            accept_invalid_certs: matches!(self.tls, TlsVerification::DangerAcceptInvalid),
        }
    }
}
