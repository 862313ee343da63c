// ── Core error taxonomy ──

use thiserror::Error;

/// Errors produced by the core layer.
///
/// Mutation failures are expected to be surfaced to the user as transient
/// notifications by the dispatcher, not propagated as fatal errors; the
/// remaining variants are genuine caller mistakes or transport failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] magview_api::Error),

    #[error("gateway '{identifier}' not found")]
    GatewayNotFound { identifier: String },

    #[error("tier '{identifier}' is not in the network's tier catalog")]
    TierNotFound { identifier: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("confirmation prompt failed: {message}")]
    Prompt { message: String },
}
