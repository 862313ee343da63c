//! Gateway command handlers.

use chrono::{DateTime, Utc};
use tabled::Tabled;

use magview_core::{
    Controller, GatewayActions, GatewayTable, LteGateway, StatusRow, UpgradeRow,
    is_gateway_healthy, project_gateway_rows,
};

use crate::cli::{GatewaysArgs, GatewaysCommand, GlobalOpts, TableView};
use crate::error::CliError;
use crate::notify::{DialoguerConfirm, PrintNavigator, StderrNotifier};
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "eNodeBs")]
    enodebs: usize,
    #[tabled(rename = "Subscribers")]
    subscribers: u32,
    #[tabled(rename = "Health")]
    health: String,
    #[tabled(rename = "Last Checkin")]
    checkin: String,
}

#[derive(Tabled)]
struct UpgradeTableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Hardware UUID")]
    hardware_id: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Current Version")]
    version: String,
}

impl From<&StatusRow> for StatusTableRow {
    fn from(row: &StatusRow) -> Self {
        Self {
            name: row.name.clone(),
            id: row.id.clone(),
            enodebs: row.enodeb_count,
            subscribers: row.subscriber_count,
            health: row.health.to_string(),
            checkin: format_checkin(row.checkin_time),
        }
    }
}

impl From<&UpgradeRow> for UpgradeTableRow {
    fn from(row: &UpgradeRow) -> Self {
        Self {
            name: row.name.clone(),
            id: row.id.clone(),
            hardware_id: row.hardware_id.clone(),
            tier: row.tier.clone(),
            version: row.current_version.clone(),
        }
    }
}

/// The epoch sentinel marks a gateway that has never checked in.
fn format_checkin(checkin: DateTime<Utc>) -> String {
    if checkin == DateTime::UNIX_EPOCH {
        "-".into()
    } else {
        checkin.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

fn detail(gateway: &LteGateway, subscriber_count: u32, healthy: bool) -> String {
    let mut lines = vec![
        format!("ID:          {}", gateway.id),
        format!("Name:        {}", gateway.name),
        format!("Hardware:    {}", gateway.hardware_id().unwrap_or("-")),
        format!("Tier:        {}", gateway.tier),
        format!("Health:      {}", if healthy { "Good" } else { "Bad" }),
        format!(
            "Checkin:     {}",
            gateway
                .checkin_time()
                .map_or_else(|| "-".into(), format_checkin)
        ),
        format!("eNodeBs:     {}", gateway.connected_enodeb_serials.len()),
        format!("Subscribers: {subscriber_count}"),
    ];
    if !gateway.description.is_empty() {
        lines.push(format!("Description: {}", gateway.description));
    }
    if let Some(version) = gateway
        .status
        .as_ref()
        .and_then(|s| s.package_version(magview_core::PLATFORM_PACKAGE))
    {
        lines.push(format!("Version:     {version}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: GatewaysArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GatewaysCommand::List { view } => {
            controller.refresh().await?;
            let (status_rows, upgrade_rows) = project_rows(controller);

            let out = match view {
                TableView::Status => output::render_list(
                    &global.output,
                    &status_rows,
                    |r| StatusTableRow::from(r),
                    |r| r.id.clone(),
                ),
                TableView::Upgrade => output::render_list(
                    &global.output,
                    &upgrade_rows,
                    |r| UpgradeTableRow::from(r),
                    |r| r.id.clone(),
                ),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GatewaysCommand::Get { gateway } => {
            controller.refresh().await?;
            let found = controller.get_gateway(&gateway).await?;

            let subscribers = controller.subscriber_index();
            let count = found
                .hardware_id()
                .and_then(|hw| subscribers.get(hw).copied())
                .unwrap_or(0);
            let healthy = is_gateway_healthy(&found, Utc::now());

            let out = output::render_single(
                &global.output,
                found.as_ref(),
                |g| detail(g, count, healthy),
                |g| g.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GatewaysCommand::SetTier { gateway, tier } => {
            controller.refresh().await?;
            controller.get_gateway(&gateway).await?;
            controller.validate_tier(&tier)?;

            let (status_rows, upgrade_rows) = project_rows(controller);
            let mut table = GatewayTable::new();
            table.refresh(status_rows, upgrade_rows);

            let actions = actions(controller, global);
            if !actions.update_tier(&mut table, &gateway, &tier).await {
                return Err(CliError::OperationFailed {
                    operation: "set-tier".into(),
                });
            }
            if !global.quiet {
                eprintln!("Gateway {gateway} moved to tier {tier}");
            }
            Ok(())
        }

        GatewaysCommand::Remove { gateway } => {
            controller.refresh().await?;
            controller.get_gateway(&gateway).await?;

            let actions = actions(controller, global);
            if !actions.remove(&gateway).await? {
                return Ok(());
            }
            // The store only drops the gateway when the removal succeeded.
            if controller.store().get(&gateway).is_some() {
                return Err(CliError::OperationFailed {
                    operation: "remove".into(),
                });
            }
            if !global.quiet {
                eprintln!("Gateway {gateway} removed");
            }
            Ok(())
        }

        GatewaysCommand::Open { gateway, config } => {
            let actions = actions(controller, global);
            if config {
                actions.edit_config(&gateway);
            } else {
                actions.view(&gateway);
            }
            Ok(())
        }
    }
}

/// Project the controller's current snapshot into both row collections.
fn project_rows(controller: &Controller) -> (Vec<StatusRow>, Vec<UpgradeRow>) {
    let snapshot = controller.gateways();
    let subscribers = controller.subscriber_index();
    let now = Utc::now();
    project_gateway_rows(
        snapshot.iter().map(std::sync::Arc::as_ref),
        &subscribers,
        |g| is_gateway_healthy(g, now),
    )
}

/// Wire the dispatcher to the CLI's terminal collaborators.
fn actions(
    controller: &Controller,
    global: &GlobalOpts,
) -> GatewayActions<Controller, StderrNotifier, DialoguerConfirm, PrintNavigator> {
    GatewayActions::new(
        controller.clone(),
        StderrNotifier::new(output::should_color(&global.color)),
        DialoguerConfirm::new(global.yes),
        PrintNavigator,
    )
}
