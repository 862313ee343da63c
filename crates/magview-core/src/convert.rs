// ── Wire → domain conversion ──
//
// Orchestrator records come in with optional sections everywhere; the
// canonical types flatten what the console actually reads. Missing fields
// default, they never error.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use magview_api::{GatewayRecord, GatewayStatusRecord, SubscriberStateRecord};

use crate::model::{GatewayDevice, GatewayStatus, LteGateway, PlatformInfo, SoftwarePackage};
use crate::rows::SubscriberIndex;

impl From<GatewayRecord> for LteGateway {
    fn from(rec: GatewayRecord) -> Self {
        let checkin_interval_secs = rec.magmad.as_ref().and_then(|m| m.checkin_interval);
        Self {
            id: rec.id,
            name: rec.name,
            description: rec.description,
            cellular_configured: rec.cellular.is_some(),
            connected_enodeb_serials: rec.connected_enodeb_serials,
            device: rec.device.map(|d| GatewayDevice {
                hardware_id: d.hardware_id,
            }),
            status: rec.status.map(GatewayStatus::from),
            checkin_interval_secs,
            tier: rec.tier,
        }
    }
}

impl From<GatewayStatusRecord> for GatewayStatus {
    fn from(rec: GatewayStatusRecord) -> Self {
        Self {
            checkin_time: rec.checkin_time.and_then(millis_to_datetime),
            platform_info: rec.platform_info.map(|p| PlatformInfo {
                packages: p
                    .packages
                    .into_iter()
                    .map(|pkg| SoftwarePackage {
                        name: pkg.name,
                        version: pkg.version,
                    })
                    .collect(),
                vpn_ip: p.vpn_ip,
            }),
        }
    }
}

fn millis_to_datetime(millis: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(i64::try_from(millis).ok()?)
}

/// Build the hardware-id → subscriber-count index from subscriber state.
///
/// Each subscriber is attributed to the gateway that most recently served
/// it (head of the directory location history). Subscribers without a
/// directory record are not attributed anywhere.
pub fn subscriber_index(
    states: &HashMap<String, SubscriberStateRecord>,
) -> SubscriberIndex {
    let mut index = SubscriberIndex::new();
    for state in states.values() {
        let Some(hw_id) = state
            .directory
            .as_ref()
            .and_then(|d| d.location_history.first())
        else {
            continue;
        };
        *index.entry(hw_id.clone()).or_insert(0) += 1;
    }
    index
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn record(json: serde_json::Value) -> GatewayRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn full_record_converts() {
        let gw: LteGateway = record(json!({
            "id": "gw1",
            "name": "Lab Gateway",
            "cellular": { "epc": {} },
            "connected_enodeb_serials": ["sn-1"],
            "device": { "hardware_id": "hw-1" },
            "status": {
                "checkin_time": 1_700_000_000_000_u64,
                "platform_info": { "packages": [ { "name": "magma", "version": "1.8.0" } ] }
            },
            "magmad": { "checkin_interval": 120 },
            "tier": "default"
        }))
        .into();

        assert_eq!(gw.id, "gw1");
        assert!(gw.cellular_configured);
        assert_eq!(gw.connected_enodeb_serials, vec!["sn-1".to_owned()]);
        assert_eq!(gw.hardware_id(), Some("hw-1"));
        assert_eq!(gw.checkin_interval_secs, Some(120));
        assert_eq!(gw.tier, "default");
        assert_eq!(
            gw.checkin_time().unwrap().timestamp_millis(),
            1_700_000_000_000
        );
        assert_eq!(
            gw.status.unwrap().package_version("magma"),
            Some("1.8.0")
        );
    }

    #[test]
    fn bare_record_defaults() {
        let gw: LteGateway = record(json!({ "id": "gw2" })).into();
        assert!(!gw.cellular_configured);
        assert!(gw.connected_enodeb_serials.is_empty());
        assert!(gw.device.is_none());
        assert!(gw.status.is_none());
        assert!(gw.checkin_time().is_none());
    }

    #[test]
    fn subscriber_index_counts_by_serving_gateway() {
        let states: HashMap<String, SubscriberStateRecord> = serde_json::from_value(json!({
            "IMSI1": { "directory": { "location_history": ["hw-1", "hw-2"] } },
            "IMSI2": { "directory": { "location_history": ["hw-1"] } },
            "IMSI3": { "directory": { "location_history": ["hw-2"] } },
            "IMSI4": {},
        }))
        .unwrap();

        let index = subscriber_index(&states);
        assert_eq!(index.get("hw-1"), Some(&2));
        assert_eq!(index.get("hw-2"), Some(&1));
        assert_eq!(index.len(), 2);
    }
}
