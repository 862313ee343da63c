// ── Wire types for the orchestrator REST API ──
//
// Shapes follow the orchestrator's swagger models. Fields this console
// never reads are captured loosely (`serde_json::Value`) or omitted;
// unknown fields are ignored by serde's default behavior.

use serde::{Deserialize, Serialize};

/// An LTE gateway as returned by `GET /lte/{network}/gateways`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Presence of the cellular section is what marks this record as a
    /// fully-configured LTE gateway. The EPC/RAN contents are opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connected_enodeb_serials: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<GatewayDeviceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GatewayStatusRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magmad: Option<MagmadConfigRecord>,
    #[serde(default)]
    pub tier: String,
}

/// Hardware identity section of a gateway record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayDeviceRecord {
    pub hardware_id: String,
}

/// Last-reported runtime status of a gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayStatusRecord {
    /// Milliseconds since the Unix epoch of the last checkin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_info: Option<PlatformInfoRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformInfoRecord {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<PackageRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpn_ip: Option<String>,
}

/// An installed platform package (`name` + `version`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Magmad agent configuration — source of the checkin interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagmadConfigRecord {
    /// Seconds between gateway checkins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin_timeout: Option<u32>,
    #[serde(default)]
    pub autoupgrade_enabled: bool,
}

/// A subscriber's reported state, from `GET /lte/{network}/subscriber_state`.
///
/// Only the directory record is consumed: its location history lists the
/// hardware ids of the gateways that most recently served the subscriber.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriberStateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<DirectoryRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryRecord {
    /// Gateway hardware ids, most recent first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_history: Vec<String>,
}

/// Body shape of orchestrator error responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
