// ── Gateway domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The canonical LTE gateway type, converted from the orchestrator's wire
/// records. One instance per managed edge device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LteGateway {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Whether the gateway carries a cellular (EPC/RAN) configuration.
    /// Records without one are registration stubs and are excluded from
    /// the equipment views.
    pub cellular_configured: bool,

    /// Serials of the radio units (enodeBs) attached to this gateway.
    pub connected_enodeb_serials: Vec<String>,

    pub device: Option<GatewayDevice>,
    pub status: Option<GatewayStatus>,

    /// Seconds between expected checkins (magmad agent config).
    pub checkin_interval_secs: Option<u32>,

    /// Assigned software tier id.
    pub tier: String,
}

impl LteGateway {
    /// The hardware id, when the device section was reported.
    pub fn hardware_id(&self) -> Option<&str> {
        self.device.as_ref().map(|d| d.hardware_id.as_str())
    }

    /// Last checkin timestamp, if the gateway has ever reported status.
    pub fn checkin_time(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref().and_then(|s| s.checkin_time)
    }
}

/// Hardware identity of a gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayDevice {
    pub hardware_id: String,
}

/// Last-reported runtime status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayStatus {
    pub checkin_time: Option<DateTime<Utc>>,
    pub platform_info: Option<PlatformInfo>,
}

impl GatewayStatus {
    /// Version of the named platform package, if reported.
    pub fn package_version(&self, name: &str) -> Option<&str> {
        self.platform_info
            .as_ref()?
            .packages
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.version.as_str())
    }
}

/// Platform-level status details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub packages: Vec<SoftwarePackage>,
    pub vpn_ip: Option<String>,
}

/// An installed software package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwarePackage {
    pub name: String,
    pub version: String,
}
