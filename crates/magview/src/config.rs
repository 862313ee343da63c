//! CLI configuration: TOML profiles plus `GlobalOpts` flag overrides.
//!
//! Profiles live in a single TOML file resolved via platform conventions;
//! figment layers the file under `MAGVIEW_`-prefixed environment
//! variables. Flags always win over both.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use magview_core::{OrchestratorConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Named orchestrator profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// A named orchestrator profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Orchestrator base URL (e.g., "https://orc8r.example:9443").
    pub orchestrator: String,

    /// Network id the console is scoped to.
    pub network: String,

    /// API token (plaintext — prefer token_env).
    pub token: Option<String>,

    /// Environment variable name containing the API token.
    pub token_env: Option<String>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "magview", "magview").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("magview");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("MAGVIEW_CONFIG_").split("_"));

    Ok(figment.extract()?)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

// ── Resolution to OrchestratorConfig ────────────────────────────────

/// Build an `OrchestratorConfig` from the config file, the active
/// profile, and CLI flag overrides. Flags win over profile values.
pub fn resolve(global: &GlobalOpts) -> Result<OrchestratorConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global);
    }

    // A profile was asked for by name but doesn't exist.
    if global.profile.is_some() {
        let mut available: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
        available.sort_unstable();
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available.join(", "),
        });
    }

    // No profile -- build from CLI flags / env vars alone.
    let url_str = global.orchestrator.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    let url = parse_url(url_str)?;

    let network = global.network.clone().ok_or_else(|| CliError::Validation {
        field: "network".into(),
        reason: "required when no profile is configured".into(),
    })?;

    let token = global
        .token
        .clone()
        .map(SecretString::from)
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name,
        })?;

    Ok(OrchestratorConfig {
        url,
        network,
        token,
        tls: tls_from_flag(global.insecure),
        timeout: Duration::from_secs(global.timeout),
    })
}

/// Translate a `Profile` + global flags into an `OrchestratorConfig`.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<OrchestratorConfig, CliError> {
    // 1. Orchestrator URL (flag > env > profile)
    let url_str = global.orchestrator.as_deref().unwrap_or(&profile.orchestrator);
    let url = parse_url(url_str)?;

    // 2. Network (flag > env > profile)
    let network = global
        .network
        .as_deref()
        .unwrap_or(&profile.network)
        .to_owned();

    // 3. Token (flag > profile token_env > plaintext)
    let token = resolve_token(profile, profile_name, global)?;

    // 4. TLS verification
    let tls = tls_from_flag(global.insecure || profile.insecure.unwrap_or(false));

    // 5. Timeout (flag default is 30; an explicit profile value wins only
    //    when the flag was left at its default)
    let timeout = if global.timeout == 30 {
        profile.timeout.unwrap_or(30)
    } else {
        global.timeout
    };

    Ok(OrchestratorConfig {
        url,
        network,
        token,
        tls,
        timeout: Duration::from_secs(timeout),
    })
}

fn resolve_token(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    if let Some(ref token) = global.token {
        return Ok(SecretString::from(token.clone()));
    }
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }
    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}

fn parse_url(url_str: &str) -> Result<url::Url, CliError> {
    url_str.parse().map_err(|_| CliError::Validation {
        field: "orchestrator".into(),
        reason: format!("invalid URL: {url_str}"),
    })
}

fn tls_from_flag(insecure: bool) -> TlsVerification {
    if insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    }
}
