// ── Tier domain type ──

use serde::{Deserialize, Serialize};

/// A named software version-group assignable to gateways.
///
/// The orchestrator's tier listing only yields ids; the struct leaves room
/// for the catalog to grow richer (target version, member list) without
/// touching consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
}

impl Tier {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
