// ── Gateway health classification ──

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::LteGateway;

/// Checkin interval assumed when the magmad config doesn't report one.
pub const DEFAULT_CHECKIN_INTERVAL_SECS: u32 = 60;

/// Health verdict shown in the status view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum GatewayHealth {
    Good,
    Bad,
}

impl GatewayHealth {
    pub fn from_healthy(healthy: bool) -> Self {
        if healthy { Self::Good } else { Self::Bad }
    }
}

/// Pure health classifier: a gateway is healthy iff its last checkin is
/// within twice its configured checkin interval of `now`.
///
/// A gateway that has never checked in is unhealthy.
pub fn is_gateway_healthy(gateway: &LteGateway, now: DateTime<Utc>) -> bool {
    let Some(checkin) = gateway.checkin_time() else {
        return false;
    };
    let interval = i64::from(
        gateway
            .checkin_interval_secs
            .unwrap_or(DEFAULT_CHECKIN_INTERVAL_SECS),
    );
    now.signed_duration_since(checkin) <= Duration::seconds(2 * interval)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::GatewayStatus;

    fn gateway(checkin: Option<DateTime<Utc>>, interval: Option<u32>) -> LteGateway {
        LteGateway {
            id: "gw1".into(),
            name: String::new(),
            description: String::new(),
            cellular_configured: true,
            connected_enodeb_serials: Vec::new(),
            device: None,
            status: checkin.map(|t| GatewayStatus {
                checkin_time: Some(t),
                platform_info: None,
            }),
            checkin_interval_secs: interval,
            tier: "default".into(),
        }
    }

    #[test]
    fn recent_checkin_is_healthy() {
        let now = Utc::now();
        let gw = gateway(Some(now - Duration::seconds(30)), None);
        assert!(is_gateway_healthy(&gw, now));
    }

    #[test]
    fn stale_checkin_is_unhealthy() {
        let now = Utc::now();
        let gw = gateway(Some(now - Duration::seconds(121)), None);
        assert!(!is_gateway_healthy(&gw, now));
    }

    #[test]
    fn never_checked_in_is_unhealthy() {
        assert!(!is_gateway_healthy(&gateway(None, None), Utc::now()));
    }

    #[test]
    fn custom_interval_widens_the_window() {
        let now = Utc::now();
        let gw = gateway(Some(now - Duration::seconds(500)), Some(300));
        assert!(is_gateway_healthy(&gw, now));
    }

    #[test]
    fn health_enum_from_classifier_result() {
        assert_eq!(GatewayHealth::from_healthy(true), GatewayHealth::Good);
        assert_eq!(GatewayHealth::from_healthy(false), GatewayHealth::Bad);
        assert_eq!(GatewayHealth::Good.to_string(), "Good");
        assert_eq!(GatewayHealth::Bad.to_string(), "Bad");
    }
}
