//! Async client for the Magma orchestrator REST API.
//!
//! Exposes the narrow surface the gateway console consumes:
//!
//! - **[`OrchestratorClient`]** — network-scoped HTTP client with
//!   bearer-token auth and typed error mapping.
//! - **Wire models** ([`models`]) — serde shapes for gateway, tier, and
//!   subscriber-state payloads.
//! - **[`TransportConfig`]** — timeout / TLS knobs for the underlying
//!   `reqwest` client.

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::OrchestratorClient;
pub use error::Error;
pub use models::{
    DirectoryRecord, GatewayDeviceRecord, GatewayRecord, GatewayStatusRecord, MagmadConfigRecord,
    PackageRecord, PlatformInfoRecord, SubscriberStateRecord,
};
pub use transport::TransportConfig;
