// ── Orchestrator session facade ──
//
// Owns the API client, the reactive gateway store, and the cached tier
// catalog / subscriber index for one network. Cheap to clone; all clones
// share one session.

use std::sync::{Arc, RwLock};

use tokio::join;
use tracing::{debug, warn};

use magview_api::OrchestratorClient;

use crate::config::OrchestratorConfig;
use crate::convert::subscriber_index;
use crate::dispatch::GatewayMutator;
use crate::error::CoreError;
use crate::model::{LteGateway, Tier};
use crate::rows::SubscriberIndex;
use crate::store::GatewayStore;

/// Handle to one orchestrator network session.
#[derive(Clone)]
pub struct Controller {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    config: OrchestratorConfig,
    client: OrchestratorClient,
    store: GatewayStore,
    tiers: RwLock<Arc<Vec<Tier>>>,
    subscribers: RwLock<Arc<SubscriberIndex>>,
}

impl Controller {
    /// Build a session from connection configuration. No requests are made
    /// until the first [`refresh`](Self::refresh).
    pub fn new(config: OrchestratorConfig) -> Result<Self, CoreError> {
        let client = OrchestratorClient::new(
            config.url.clone(),
            config.network.clone(),
            config.token.clone(),
            &config.transport(),
        )?;
        Ok(Self {
            inner: Arc::new(ControllerInner {
                config,
                client,
                store: GatewayStore::new(),
                tiers: RwLock::new(Arc::new(Vec::new())),
                subscribers: RwLock::new(Arc::new(SubscriberIndex::new())),
            }),
        })
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &GatewayStore {
        &self.inner.store
    }

    /// Fetch gateways, the tier catalog, and subscriber state, and apply
    /// them to the local caches.
    ///
    /// The gateway listing is the source of truth for the console; failure
    /// to fetch it is fatal. Tier and subscriber fetches are auxiliary:
    /// their failures are logged and the previous cache is kept.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        let (gateways, tiers, subscribers) = join!(
            self.inner.client.list_gateways(),
            self.inner.client.list_tiers(),
            self.inner.client.list_subscriber_state(),
        );

        let gateways = gateways?;
        debug!(count = gateways.len(), "refreshed gateway snapshot");
        self.inner
            .store
            .apply_snapshot(gateways.into_values().map(LteGateway::from).collect());

        match tiers {
            Ok(ids) => {
                let catalog: Vec<Tier> = ids.into_iter().map(Tier::new).collect();
                *self.write_tiers() = Arc::new(catalog);
            }
            Err(e) => warn!(error = %e, "tier catalog refresh failed, keeping cache"),
        }

        match subscribers {
            Ok(states) => {
                *self.write_subscribers() = Arc::new(subscriber_index(&states));
            }
            Err(e) => warn!(error = %e, "subscriber state refresh failed, keeping cache"),
        }

        Ok(())
    }

    /// Current ordered gateway snapshot.
    pub fn gateways(&self) -> Arc<Vec<Arc<LteGateway>>> {
        self.inner.store.snapshot()
    }

    /// Look up a gateway by id, falling back to a fetch when it isn't in
    /// the local snapshot.
    pub async fn get_gateway(&self, gateway_id: &str) -> Result<Arc<LteGateway>, CoreError> {
        if let Some(gateway) = self.inner.store.get(gateway_id) {
            return Ok(gateway);
        }
        match self.inner.client.get_gateway(gateway_id).await {
            Ok(record) => {
                let gateway = LteGateway::from(record);
                self.inner.store.upsert(gateway.clone());
                Ok(Arc::new(gateway))
            }
            Err(magview_api::Error::NotFound { .. }) => Err(CoreError::GatewayNotFound {
                identifier: gateway_id.to_owned(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// The network's tier catalog, as of the last successful refresh.
    pub fn tier_catalog(&self) -> Arc<Vec<Tier>> {
        self.inner
            .tiers
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Hardware-id → subscriber-count index, as of the last refresh.
    pub fn subscriber_index(&self) -> Arc<SubscriberIndex> {
        self.inner
            .subscribers
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Reject tier ids that are not in the cached catalog.
    pub fn validate_tier(&self, tier_id: &str) -> Result<(), CoreError> {
        let catalog = self.tier_catalog();
        if catalog.is_empty() || catalog.iter().any(|t| t.id == tier_id) {
            Ok(())
        } else {
            Err(CoreError::TierNotFound {
                identifier: tier_id.to_owned(),
            })
        }
    }

    fn write_tiers(&self) -> std::sync::RwLockWriteGuard<'_, Arc<Vec<Tier>>> {
        self.inner
            .tiers
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_subscribers(&self) -> std::sync::RwLockWriteGuard<'_, Arc<SubscriberIndex>> {
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl GatewayMutator for Controller {
    /// Persist a tier assignment, then patch the stored gateway so local
    /// reads reflect the change before the next refresh.
    async fn update_gateway_tier(&self, gateway_id: &str, tier_id: &str) -> Result<(), CoreError> {
        self.inner
            .client
            .update_gateway_tier(gateway_id, tier_id)
            .await?;
        if let Some(current) = self.inner.store.get(gateway_id) {
            let mut updated = (*current).clone();
            updated.tier = tier_id.to_owned();
            self.inner.store.upsert(updated);
        }
        Ok(())
    }

    async fn remove_gateway(&self, gateway_id: &str) -> Result<(), CoreError> {
        self.inner.client.remove_gateway(gateway_id).await?;
        self.inner.store.remove(gateway_id);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::TlsVerification;

    fn config(server: &MockServer) -> OrchestratorConfig {
        OrchestratorConfig {
            url: server.uri().parse().unwrap(),
            network: "lab".into(),
            token: "secret-token".into(),
            tls: TlsVerification::SystemDefaults,
            timeout: Duration::from_secs(5),
        }
    }

    async fn mock_listing(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/magma/v1/lte/lab/gateways"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "gw1": {
                    "id": "gw1",
                    "name": "first",
                    "cellular": { "epc": {} },
                    "device": { "hardware_id": "hw-1" },
                    "tier": "default"
                },
                "gw2": {
                    "id": "gw2",
                    "name": "second",
                    "cellular": { "epc": {} },
                    "device": { "hardware_id": "hw-2" },
                    "tier": "default"
                }
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/magma/v1/networks/lab/tiers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["default", "canary"])))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/magma/v1/lte/lab/subscriber_state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "IMSI001": { "directory": { "location_history": ["hw-1"] } }
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn refresh_populates_store_and_caches() {
        let server = MockServer::start().await;
        mock_listing(&server).await;

        let controller = Controller::new(config(&server)).unwrap();
        controller.refresh().await.unwrap();

        let snapshot = controller.gateways();
        let ids: Vec<&str> = snapshot.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["gw1", "gw2"]);

        let tier_catalog = controller.tier_catalog();
        let tiers: Vec<&str> = tier_catalog
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(tiers, ["default", "canary"]);

        assert_eq!(controller.subscriber_index().get("hw-1"), Some(&1));
    }

    #[tokio::test]
    async fn refresh_tolerates_auxiliary_fetch_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/magma/v1/lte/lab/gateways"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "gw1": { "id": "gw1", "name": "first", "cellular": {}, "tier": "default" }
            })))
            .mount(&server)
            .await;
        // Tier and subscriber endpoints are left unmocked and will 404.

        let controller = Controller::new(config(&server)).unwrap();
        controller.refresh().await.unwrap();

        assert_eq!(controller.gateways().len(), 1);
        assert!(controller.tier_catalog().is_empty());
        assert!(controller.subscriber_index().is_empty());
    }

    #[tokio::test]
    async fn gateway_fetch_failure_is_fatal() {
        let server = MockServer::start().await;

        let controller = Controller::new(config(&server)).unwrap();
        let err = controller.refresh().await.unwrap_err();
        assert!(matches!(err, CoreError::Api(_)));
    }

    #[tokio::test]
    async fn tier_update_patches_the_stored_gateway() {
        let server = MockServer::start().await;
        mock_listing(&server).await;
        Mock::given(method("PUT"))
            .and(path("/magma/v1/lte/lab/gateways/gw1/tier"))
            .and(body_json(json!("canary")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let controller = Controller::new(config(&server)).unwrap();
        controller.refresh().await.unwrap();

        controller.update_gateway_tier("gw1", "canary").await.unwrap();

        assert_eq!(controller.store().get("gw1").unwrap().tier, "canary");
        // Snapshot order is untouched by the in-place patch
        let ids: Vec<String> = controller
            .gateways()
            .iter()
            .map(|g| g.id.clone())
            .collect();
        assert_eq!(ids, ["gw1", "gw2"]);
    }

    #[tokio::test]
    async fn removal_drops_the_stored_gateway() {
        let server = MockServer::start().await;
        mock_listing(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/magma/v1/lte/lab/gateways/gw2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let controller = Controller::new(config(&server)).unwrap();
        controller.refresh().await.unwrap();

        controller.remove_gateway("gw2").await.unwrap();

        assert!(controller.store().get("gw2").is_none());
        assert_eq!(controller.gateways().len(), 1);
    }

    #[tokio::test]
    async fn tier_validation_uses_the_cached_catalog() {
        let server = MockServer::start().await;
        mock_listing(&server).await;

        let controller = Controller::new(config(&server)).unwrap();
        controller.refresh().await.unwrap();

        assert!(controller.validate_tier("canary").is_ok());
        assert!(matches!(
            controller.validate_tier("nope"),
            Err(CoreError::TierNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn get_gateway_falls_back_to_a_fetch() {
        let server = MockServer::start().await;
        mock_listing(&server).await;
        Mock::given(method("GET"))
            .and(path("/magma/v1/lte/lab/gateways/gw9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gw9", "name": "ninth", "cellular": {}, "tier": "default"
            })))
            .mount(&server)
            .await;

        let controller = Controller::new(config(&server)).unwrap();
        controller.refresh().await.unwrap();

        let gateway = controller.get_gateway("gw9").await.unwrap();
        assert_eq!(gateway.name, "ninth");
        // Now cached
        assert!(controller.store().get("gw9").is_some());
    }
}
