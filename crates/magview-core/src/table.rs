// ── Equipment table view state ──
//
// Holds the current view mode, the selected row, and both row
// collections. Upgrade rows live in their own mutable field so a confirmed
// tier edit patches one row without re-deriving the whole collection.

use crate::rows::{StatusRow, UpgradeRow};

/// Which of the two parallel views the table is showing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "title_case")]
pub enum ViewMode {
    #[default]
    Status,
    Upgrade,
}

/// View controller for the gateway table.
///
/// Row collections are replaced wholesale on [`refresh`](Self::refresh);
/// the single mutation path between refreshes is the id-keyed tier patch
/// applied after a confirmed tier update.
#[derive(Debug, Default)]
pub struct GatewayTable {
    view: ViewMode,
    selected: Option<String>,
    status_rows: Vec<StatusRow>,
    upgrade_rows: Vec<UpgradeRow>,
}

impl GatewayTable {
    pub fn new() -> Self {
        Self::default()
    }

    // ── View mode ────────────────────────────────────────────────────

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch views. Does not touch the selection or either collection.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    // ── Selection ────────────────────────────────────────────────────

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Remember the row the context menu is acting on.
    pub fn select(&mut self, gateway_id: impl Into<String>) {
        self.selected = Some(gateway_id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ── Row collections ──────────────────────────────────────────────

    pub fn status_rows(&self) -> &[StatusRow] {
        &self.status_rows
    }

    pub fn upgrade_rows(&self) -> &[UpgradeRow] {
        &self.upgrade_rows
    }

    /// Number of rows in the currently shown view.
    pub fn row_count(&self) -> usize {
        match self.view {
            ViewMode::Status => self.status_rows.len(),
            ViewMode::Upgrade => self.upgrade_rows.len(),
        }
    }

    /// Reseed both collections from fresh projector output.
    pub fn refresh(&mut self, status_rows: Vec<StatusRow>, upgrade_rows: Vec<UpgradeRow>) {
        self.status_rows = status_rows;
        self.upgrade_rows = upgrade_rows;
    }

    /// Patch the upgrade row for `gateway_id` with its new tier.
    ///
    /// Id-keyed rather than index-keyed, so concurrent edits to other rows
    /// cannot land the patch on the wrong gateway. The collection is
    /// replaced as a whole snapshot; readers never observe a partial
    /// update. Returns `false` when no row matches.
    pub fn apply_tier_update(&mut self, gateway_id: &str, tier_id: &str) -> bool {
        if !self.upgrade_rows.iter().any(|r| r.id == gateway_id) {
            return false;
        }
        let patched: Vec<UpgradeRow> = self
            .upgrade_rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                if row.id == gateway_id {
                    row.tier = tier_id.to_owned();
                }
                row
            })
            .collect();
        self.upgrade_rows = patched;
        true
    }
}
