//! Tier command handlers.

use tabled::Tabled;

use magview_core::{Controller, Tier};

use crate::cli::{GlobalOpts, TiersArgs, TiersCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Tier")]
    id: String,
}

pub async fn handle(
    controller: &Controller,
    args: TiersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TiersCommand::List => {
            controller.refresh().await?;
            let catalog = controller.tier_catalog();

            let out = output::render_list(
                &global.output,
                &catalog,
                |t: &Tier| TierRow { id: t.id.clone() },
                |t| t.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
