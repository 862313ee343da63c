// ── Reactive gateway store ──
//
// Concurrent storage for the gateway snapshot with O(1) id and
// hardware-id lookups and push-based change notification via `watch`
// channels. Snapshot order is preserved from the refresh that produced
// it, because row projection follows entity order.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::watch;

use crate::model::LteGateway;

/// Reactive collection of the network's gateways.
///
/// Mutations bump a version counter and replace the broadcast snapshot
/// wholesale, so readers always observe a consistent collection.
pub struct GatewayStore {
    /// Primary storage: gateway id → gateway.
    by_id: DashMap<String, Arc<LteGateway>>,

    /// Secondary index: hardware id → gateway id.
    hw_to_id: DashMap<String, String>,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,

    /// Ordered snapshot, rebuilt on mutation for efficient subscription.
    snapshot: watch::Sender<Arc<Vec<Arc<LteGateway>>>>,
}

impl Default for GatewayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayStore {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            by_id: DashMap::new(),
            hw_to_id: DashMap::new(),
            version,
            snapshot,
        }
    }

    /// Replace the entire collection with a fresh snapshot, preserving the
    /// given order.
    pub fn apply_snapshot(&self, gateways: Vec<LteGateway>) {
        self.by_id.clear();
        self.hw_to_id.clear();

        let mut ordered = Vec::with_capacity(gateways.len());
        for gateway in gateways {
            let gateway = Arc::new(gateway);
            if let Some(hw_id) = gateway.hardware_id() {
                self.hw_to_id.insert(hw_id.to_owned(), gateway.id.clone());
            }
            self.by_id.insert(gateway.id.clone(), Arc::clone(&gateway));
            ordered.push(gateway);
        }

        self.snapshot.send_modify(|snap| *snap = Arc::new(ordered));
        self.bump_version();
    }

    /// Insert or update a single gateway. An existing gateway keeps its
    /// snapshot position; a new one is appended. Returns `true` if the id
    /// was new.
    pub fn upsert(&self, gateway: LteGateway) -> bool {
        // Clean up a stale hardware-id mapping if the hardware changed.
        if let Some(previous) = self.by_id.get(&gateway.id) {
            if let Some(old_hw) = previous.hardware_id() {
                if gateway.hardware_id() != Some(old_hw) {
                    self.hw_to_id.remove(old_hw);
                }
            }
        }

        let gateway = Arc::new(gateway);
        if let Some(hw_id) = gateway.hardware_id() {
            self.hw_to_id.insert(hw_id.to_owned(), gateway.id.clone());
        }
        let is_new = self
            .by_id
            .insert(gateway.id.clone(), Arc::clone(&gateway))
            .is_none();

        self.snapshot.send_modify(|snap| {
            let mut next: Vec<Arc<LteGateway>> = snap.as_ref().clone();
            match next.iter().position(|g| g.id == gateway.id) {
                Some(idx) => next[idx] = gateway,
                None => next.push(gateway),
            }
            *snap = Arc::new(next);
        });
        self.bump_version();

        is_new
    }

    /// Remove a gateway by id. Returns the removed gateway if it existed.
    pub fn remove(&self, gateway_id: &str) -> Option<Arc<LteGateway>> {
        let removed = self.by_id.remove(gateway_id).map(|(_, v)| v)?;
        if let Some(hw_id) = removed.hardware_id() {
            self.hw_to_id.remove(hw_id);
        }
        self.snapshot.send_modify(|snap| {
            let next: Vec<Arc<LteGateway>> = snap
                .iter()
                .filter(|g| g.id != gateway_id)
                .map(Arc::clone)
                .collect();
            *snap = Arc::new(next);
        });
        self.bump_version();
        Some(removed)
    }

    /// Look up a gateway by id.
    pub fn get(&self, gateway_id: &str) -> Option<Arc<LteGateway>> {
        self.by_id.get(gateway_id).map(|r| Arc::clone(r.value()))
    }

    /// Look up a gateway by its hardware id (secondary index).
    pub fn get_by_hardware_id(&self, hardware_id: &str) -> Option<Arc<LteGateway>> {
        let id = self.hw_to_id.get(hardware_id)?;
        self.by_id
            .get(id.value().as_str())
            .map(|r| Arc::clone(r.value()))
    }

    /// Get the current ordered snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<Arc<LteGateway>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<LteGateway>>>> {
        self.snapshot.subscribe()
    }

    /// Subscribe to the mutation version counter.
    pub fn subscribe_version(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn bump_version(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}
