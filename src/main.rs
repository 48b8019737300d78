use clap::{CommandFactory, Parser};
use colored::*;
use std::process;

use rbxstats::api::RbxStatsClient;
use rbxstats::cli::Args;
use rbxstats::config::{Config, JsonConfig};
use rbxstats::ui::output::{display_error, display_fields, display_json};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Handle --config-init
    if args.config_init {
        let Some(path) = JsonConfig::user_config_path() else {
            display_error("Could not determine home directory");
            process::exit(1);
        };
        match JsonConfig::write_example(&path) {
            Ok(true) => println!("{}", format!("Wrote {}", path.display()).green()),
            Ok(false) => println!(
                "{}",
                format!("{} already exists, leaving it untouched", path.display()).yellow()
            ),
            Err(e) => {
                display_error(&format!("{:#}", e));
                process::exit(1);
            }
        }
        return Ok(());
    }

    let Some(command) = args.command.clone() else {
        Args::command().print_help()?;
        process::exit(1);
    };

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            display_error(&e);
            process::exit(1);
        }
    };

    let client = match RbxStatsClient::with_base_url(&config.api_key, &config.api_endpoint) {
        Ok(client) => client.with_verbose(config.verbose),
        Err(e) => {
            display_error(&e.to_string());
            process::exit(1);
        }
    };

    let endpoint = command.endpoint();
    let outcome = if config.json {
        client.get_json(&endpoint).await.map(|value| display_json(&value))
    } else {
        client.get(&endpoint).await.map(|fields| display_fields(&fields))
    };

    if let Err(e) = outcome {
        display_error(&e.to_string());
        process::exit(1);
    }

    Ok(())
}
