//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use magview_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the orchestrator")]
    #[diagnostic(
        code(magview::connection_failed),
        help(
            "Check that the orchestrator is running and accessible.\n\
             Self-signed certificates need --insecure (-k)."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(magview::auth_failed),
        help(
            "Verify your API token.\n\
             Pass it with --token or the MAGVIEW_TOKEN environment variable."
        )
    )]
    AuthFailed,

    #[error("No token configured for profile '{profile}'")]
    #[diagnostic(
        code(magview::no_credentials),
        help(
            "Set `token` or `token_env` in the profile,\n\
             or export MAGVIEW_TOKEN."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(magview::not_found),
        help("Run: magview {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("Orchestrator error ({status}): {message}")]
    #[diagnostic(code(magview::api_error))]
    ApiError { status: u16, message: String },

    #[error("'{operation}' failed")]
    #[diagnostic(
        code(magview::operation_failed),
        help("Details were reported above.")
    )]
    OperationFailed { operation: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(magview::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(magview::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No orchestrator configured")]
    #[diagnostic(
        code(magview::no_config),
        help(
            "Pass --orchestrator and --network, or create a profile at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(magview::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(magview::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(api) => match api {
                magview_api::Error::Authentication { .. } => CliError::AuthFailed,

                magview_api::Error::NotFound { path } => CliError::NotFound {
                    resource_type: "resource".into(),
                    identifier: path,
                    list_command: "gateways list".into(),
                },

                magview_api::Error::Api { status, message } => {
                    CliError::ApiError { status, message }
                }

                magview_api::Error::Transport(e) => CliError::ConnectionFailed {
                    source: Box::new(e),
                },

                magview_api::Error::InvalidUrl(url) => CliError::Validation {
                    field: "orchestrator".into(),
                    reason: format!("invalid URL: {url}"),
                },

                magview_api::Error::Decode(e) => CliError::Json(e),
            },

            CoreError::GatewayNotFound { identifier } => CliError::NotFound {
                resource_type: "gateway".into(),
                identifier,
                list_command: "gateways list".into(),
            },

            CoreError::TierNotFound { identifier } => CliError::NotFound {
                resource_type: "tier".into(),
                identifier,
                list_command: "tiers list".into(),
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Prompt { message } => CliError::Io(std::io::Error::other(message)),
        }
    }
}
