//! Business logic between `magview-api` and UI consumers.
//!
//! This crate owns the domain model, the row projection, and the view /
//! action state for the gateway equipment console:
//!
//! - **[`Controller`]** — Session facade for one orchestrator network:
//!   builds the API client, refreshes the gateway snapshot plus the
//!   auxiliary caches (tier catalog, subscriber index), and implements
//!   [`GatewayMutator`] for tier updates and removals.
//!
//! - **[`GatewayStore`]** — Reactive gateway storage (`DashMap` +
//!   `tokio::sync::watch`) with id and hardware-id lookups and an
//!   order-preserving snapshot for row projection.
//!
//! - **[`project_gateway_rows`]** — Pure projection from the gateway
//!   snapshot into the status and upgrade row collections, with an
//!   injected health classifier ([`is_gateway_healthy`]).
//!
//! - **[`GatewayTable`]** — View controller: Status/Upgrade view toggle,
//!   row selection, and the id-keyed tier patch.
//!
//! - **[`GatewayActions`]** — Dispatches row actions (tier edit,
//!   confirmed delete, navigation intents) against injected collaborator
//!   traits ([`GatewayMutator`], [`Notifier`], [`ConfirmPrompt`],
//!   [`Navigator`]).

pub mod config;
pub mod controller;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod health;
pub mod model;
pub mod rows;
pub mod store;
pub mod table;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{OrchestratorConfig, TlsVerification};
pub use controller::Controller;
pub use convert::subscriber_index;
pub use dispatch::{ConfirmPrompt, GatewayActions, GatewayMutator, Navigator, Notifier, Severity};
pub use error::CoreError;
pub use health::{DEFAULT_CHECKIN_INTERVAL_SECS, GatewayHealth, is_gateway_healthy};
pub use rows::{
    PLATFORM_PACKAGE, StatusRow, SubscriberIndex, UpgradeRow, VERSION_NOT_REPORTED,
    project_gateway_rows,
};
pub use store::GatewayStore;
pub use table::{GatewayTable, ViewMode};

// Re-export model types at the crate root for ergonomics.
pub use model::{GatewayDevice, GatewayStatus, LteGateway, PlatformInfo, SoftwarePackage, Tier};
