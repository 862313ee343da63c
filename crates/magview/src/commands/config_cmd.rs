//! Config command handlers. These never touch the orchestrator.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

#[derive(Clone, Serialize, Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Orchestrator")]
    orchestrator: String,
    #[tabled(rename = "Network")]
    network: String,
    #[tabled(rename = "Default")]
    default: String,
}

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = redacted(config::load_config_or_default());
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_default(),
                |c| c.default_profile.clone().unwrap_or_default(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = config::active_profile_name(global, &cfg);

            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort_unstable();

            let rows: Vec<ProfileRow> = names
                .into_iter()
                .filter_map(|name| {
                    cfg.profiles.get(name).map(|p| ProfileRow {
                        name: name.clone(),
                        orchestrator: p.orchestrator.clone(),
                        network: p.network.clone(),
                        default: if *name == default {
                            "*".into()
                        } else {
                            String::new()
                        },
                    })
                })
                .collect();

            let out =
                output::render_list(&global.output, &rows, Clone::clone, |r| r.name.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

/// Blank out secrets before any rendering path sees the config.
fn redacted(mut cfg: Config) -> Config {
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("<redacted>".into());
        }
    }
    cfg
}
