// ── Row action dispatch ──
//
// Translates table-row actions (tier edit, delete, navigation) into calls
// against the collaborators the console consumes: a mutation API, a
// notification sink, a confirmation prompt, and a navigation service.
// Every collaborator is a trait so callers inject their own
// implementations (CLI prompts here, test doubles in unit tests).

use tracing::warn;

use crate::error::CoreError;
use crate::table::GatewayTable;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Mutation API for gateway records (the entity provider's write surface).
#[allow(async_fn_in_trait)]
pub trait GatewayMutator {
    async fn update_gateway_tier(&self, gateway_id: &str, tier_id: &str)
    -> Result<(), CoreError>;
    async fn remove_gateway(&self, gateway_id: &str) -> Result<(), CoreError>;
}

/// Sink for transient user-visible messages.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Yes/no confirmation prompt, answered asynchronously by the user.
#[allow(async_fn_in_trait)]
pub trait ConfirmPrompt {
    async fn confirm(&self, message: &str) -> Result<bool, CoreError>;
}

/// Route-change service for view / edit navigation intents.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Dispatches row-level actions against the injected collaborators.
///
/// All operations are fire-and-forget from the caller's perspective:
/// failures surface as one notification and the operation is abandoned —
/// no retries, no locally tracked in-flight state.
pub struct GatewayActions<M, N, C, V> {
    mutator: M,
    notifier: N,
    prompt: C,
    navigator: V,
}

impl<M, N, C, V> GatewayActions<M, N, C, V>
where
    M: GatewayMutator,
    N: Notifier,
    C: ConfirmPrompt,
    V: Navigator,
{
    pub fn new(mutator: M, notifier: N, prompt: C, navigator: V) -> Self {
        Self {
            mutator,
            notifier,
            prompt,
            navigator,
        }
    }

    /// Assign `gateway_id` to a new tier.
    ///
    /// On success the table's upgrade row is patched in place; on failure
    /// exactly one error notification is emitted and the row collection is
    /// left untouched. Returns whether the edit was applied locally.
    pub async fn update_tier(
        &self,
        table: &mut GatewayTable,
        gateway_id: &str,
        tier_id: &str,
    ) -> bool {
        match self.mutator.update_gateway_tier(gateway_id, tier_id).await {
            Ok(()) => {
                table.apply_tier_update(gateway_id, tier_id);
                true
            }
            Err(e) => {
                warn!(gateway_id, error = %e, "tier update failed");
                self.notifier
                    .notify("failed saving gateway tier information", Severity::Error);
                false
            }
        }
    }

    /// Delete `gateway_id` after user confirmation.
    ///
    /// A declined prompt is a silent no-op: no API call, no notification.
    /// Failures of the removal itself surface as a notification naming the
    /// gateway; local state is never mutated here — the entity provider's
    /// next refresh reflects the removal. Returns whether the user
    /// confirmed.
    pub async fn remove(&self, gateway_id: &str) -> Result<bool, CoreError> {
        let confirmed = self
            .prompt
            .confirm(&format!("Are you sure you want to delete {gateway_id}?"))
            .await?;
        if !confirmed {
            return Ok(false);
        }

        if let Err(e) = self.mutator.remove_gateway(gateway_id).await {
            warn!(gateway_id, error = %e, "gateway removal failed");
            self.notifier
                .notify(&format!("failed deleting gateway {gateway_id}"), Severity::Error);
        }
        Ok(true)
    }

    /// Navigation intent: gateway detail page.
    pub fn view(&self, gateway_id: &str) {
        self.navigator.navigate(&format!("/{gateway_id}"));
    }

    /// Navigation intent: gateway config editor.
    pub fn edit_config(&self, gateway_id: &str) {
        self.navigator.navigate(&format!("/{gateway_id}/config"));
    }
}
