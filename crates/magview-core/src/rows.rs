// ── Gateway row projection ──
//
// Pure transform from the gateway snapshot (plus the subscriber index)
// into the two parallel row collections the equipment table renders.
// Recomputed in full on demand; no state is held here.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::health::GatewayHealth;
use crate::model::LteGateway;

/// Package whose version is shown in the upgrade view.
pub const PLATFORM_PACKAGE: &str = "magma";

/// Version string shown when the platform package was never reported.
pub const VERSION_NOT_REPORTED: &str = "Not Reported";

/// Hardware-id → subscriber-count index, maintained externally.
pub type SubscriberIndex = HashMap<String, u32>;

/// One row of the status view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRow {
    pub name: String,
    pub id: String,
    pub enodeb_count: usize,
    pub subscriber_count: u32,
    pub health: GatewayHealth,
    /// Epoch-zero sentinel when the gateway has never reported status.
    pub checkin_time: DateTime<Utc>,
}

/// One row of the upgrade view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeRow {
    pub name: String,
    pub id: String,
    pub hardware_id: String,
    pub tier: String,
    pub current_version: String,
}

/// Project the gateway snapshot into status and upgrade rows.
///
/// A gateway contributes exactly one row to each collection iff it has a
/// cellular configuration and a non-empty id; output order follows input
/// order. The health classifier is injected so callers control the clock.
pub fn project_gateway_rows<'a, I, F>(
    gateways: I,
    subscribers: &SubscriberIndex,
    classify: F,
) -> (Vec<StatusRow>, Vec<UpgradeRow>)
where
    I: IntoIterator<Item = &'a LteGateway>,
    F: Fn(&LteGateway) -> bool,
{
    let mut status_rows = Vec::new();
    let mut upgrade_rows = Vec::new();

    for gateway in gateways {
        if !gateway.cellular_configured || gateway.id.is_empty() {
            continue;
        }

        let hardware_id = gateway.hardware_id().unwrap_or_default().to_owned();
        let subscriber_count = subscribers.get(&hardware_id).copied().unwrap_or(0);

        status_rows.push(StatusRow {
            name: gateway.name.clone(),
            id: gateway.id.clone(),
            enodeb_count: gateway.connected_enodeb_serials.len(),
            subscriber_count,
            health: GatewayHealth::from_healthy(classify(gateway)),
            checkin_time: gateway.checkin_time().unwrap_or(DateTime::UNIX_EPOCH),
        });

        let current_version = gateway
            .status
            .as_ref()
            .and_then(|s| s.package_version(PLATFORM_PACKAGE))
            .unwrap_or(VERSION_NOT_REPORTED)
            .to_owned();

        upgrade_rows.push(UpgradeRow {
            name: gateway.name.clone(),
            id: gateway.id.clone(),
            hardware_id,
            tier: gateway.tier.clone(),
            current_version,
        });
    }

    (status_rows, upgrade_rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{GatewayDevice, GatewayStatus, PlatformInfo, SoftwarePackage};

    fn base_gateway(id: &str) -> LteGateway {
        LteGateway {
            id: id.into(),
            name: format!("gateway {id}"),
            description: String::new(),
            cellular_configured: true,
            connected_enodeb_serials: Vec::new(),
            device: Some(GatewayDevice {
                hardware_id: format!("hw-{id}"),
            }),
            status: None,
            checkin_interval_secs: None,
            tier: "default".into(),
        }
    }

    fn with_packages(mut gw: LteGateway, packages: Vec<(&str, &str)>) -> LteGateway {
        gw.status = Some(GatewayStatus {
            checkin_time: None,
            platform_info: Some(PlatformInfo {
                packages: packages
                    .into_iter()
                    .map(|(n, v)| SoftwarePackage {
                        name: n.into(),
                        version: v.into(),
                    })
                    .collect(),
                vpn_ip: None,
            }),
        });
        gw
    }

    #[test]
    fn row_count_matches_eligible_gateways() {
        let mut no_cellular = base_gateway("g2");
        no_cellular.cellular_configured = false;
        let empty_id = base_gateway("");
        let gateways = [base_gateway("g1"), no_cellular, empty_id, base_gateway("g4")];

        let (status, upgrade) =
            project_gateway_rows(gateways.iter(), &SubscriberIndex::new(), |_| true);

        assert_eq!(status.len(), 2);
        assert_eq!(upgrade.len(), 2);
        let ids: Vec<&str> = status.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["g1", "g4"]);
    }

    #[test]
    fn output_order_follows_input_order() {
        let gateways = [base_gateway("b"), base_gateway("a"), base_gateway("c")];
        let (status, upgrade) =
            project_gateway_rows(gateways.iter(), &SubscriberIndex::new(), |_| true);
        let status_ids: Vec<&str> = status.iter().map(|r| r.id.as_str()).collect();
        let upgrade_ids: Vec<&str> = upgrade.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(status_ids, ["b", "a", "c"]);
        assert_eq!(upgrade_ids, ["b", "a", "c"]);
    }

    #[test]
    fn missing_serials_yield_zero_enodeb_count() {
        let gateways = [base_gateway("g1")];
        let (status, _) =
            project_gateway_rows(gateways.iter(), &SubscriberIndex::new(), |_| true);
        assert_eq!(status[0].enodeb_count, 0);
    }

    #[test]
    fn missing_status_yields_epoch_checkin() {
        let gateways = [base_gateway("g1")];
        let (status, _) =
            project_gateway_rows(gateways.iter(), &SubscriberIndex::new(), |_| true);
        assert_eq!(status[0].checkin_time, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn reported_checkin_is_carried_through() {
        let mut gw = base_gateway("g1");
        let checkin = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        gw.status = Some(GatewayStatus {
            checkin_time: Some(checkin),
            platform_info: None,
        });
        let (status, _) =
            project_gateway_rows([&gw], &SubscriberIndex::new(), |_| true);
        assert_eq!(status[0].checkin_time, checkin);
    }

    #[test]
    fn version_falls_back_when_platform_package_absent() {
        let gw = with_packages(base_gateway("g1"), vec![("openvswitch", "2.15")]);
        let (_, upgrade) = project_gateway_rows([&gw], &SubscriberIndex::new(), |_| true);
        assert_eq!(upgrade[0].current_version, VERSION_NOT_REPORTED);
    }

    #[test]
    fn version_comes_from_platform_package() {
        let gw = with_packages(base_gateway("g1"), vec![("magma", "1.2.3")]);
        let (_, upgrade) = project_gateway_rows([&gw], &SubscriberIndex::new(), |_| true);
        assert_eq!(upgrade[0].current_version, "1.2.3");
    }

    #[test]
    fn unknown_hardware_id_yields_zero_subscribers() {
        let mut subscribers = SubscriberIndex::new();
        subscribers.insert("hw-other".into(), 7);
        let gateways = [base_gateway("g1")];
        let (status, _) = project_gateway_rows(gateways.iter(), &subscribers, |_| true);
        assert_eq!(status[0].subscriber_count, 0);
    }

    #[test]
    fn health_tracks_classifier_verdict() {
        let gateways = [base_gateway("g1"), base_gateway("g2")];
        let (status, _) = project_gateway_rows(gateways.iter(), &SubscriberIndex::new(), |g| {
            g.id == "g1"
        });
        assert_eq!(status[0].health, GatewayHealth::Good);
        assert_eq!(status[1].health, GatewayHealth::Bad);
    }

    #[test]
    fn full_scenario_produces_both_rows() {
        let mut gw = with_packages(base_gateway("g1"), vec![("magma", "2.0")]);
        gw.name = String::new();
        gw.device = Some(GatewayDevice {
            hardware_id: "h1".into(),
        });
        gw.tier = "t1".into();
        let mut subscribers = SubscriberIndex::new();
        subscribers.insert("h1".into(), 3);

        let (status, upgrade) = project_gateway_rows([&gw], &subscribers, |_| true);

        assert_eq!(
            upgrade,
            vec![UpgradeRow {
                name: String::new(),
                id: "g1".into(),
                hardware_id: "h1".into(),
                tier: "t1".into(),
                current_version: "2.0".into(),
            }]
        );
        assert_eq!(status[0].subscriber_count, 3);
        assert_eq!(status[0].health, GatewayHealth::Good);
    }

    #[test]
    fn projection_is_deterministic() {
        let gateways = [base_gateway("g1"), base_gateway("g2")];
        let subscribers = SubscriberIndex::new();
        let first = project_gateway_rows(gateways.iter(), &subscribers, |_| false);
        let second = project_gateway_rows(gateways.iter(), &subscribers, |_| false);
        assert_eq!(first, second);
    }
}
