mod aggregator;
mod catalog;
mod config;
mod constants;
mod error;
mod images;
mod models;
mod orchestrator;
mod print_help;
mod prompt;
mod provider;
mod providers;
mod server;
mod utils;

use crate::catalog::split_city_words;
use crate::config::Config;
use crate::constants::{CMD_CITIES, CMD_GENERATE, CMD_SERVE, ENV_FILE_VAR};
use crate::models::GenerationRequest;
use crate::orchestrator::Orchestrator;
use crate::print_help::print_help;
use crate::utils::{create_spinner, print_catalog, print_response};
use std::{env, error::Error, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    if args[1] == CMD_CITIES {
        print_catalog();
        return Ok(());
    }

    let config = match env::var(ENV_FILE_VAR) {
        Ok(path) => Config::from_env_file(path)?,
        Err(_) => Config::from_env()?,
    };

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()?;
    let orchestrator = Arc::new(Orchestrator::from_config(&config, &client));

    process_command(&args, &config, orchestrator).await
}

async fn process_command(
    args: &[String],
    config: &Config,
    orchestrator: Arc<Orchestrator>,
) -> Result<(), Box<dyn Error>> {
    match args[1].as_str() {
        CMD_SERVE => {
            let listener = tokio::net::TcpListener::bind(config.bind).await?;
            server::serve(listener, orchestrator, async {
                tokio::signal::ctrl_c().await.ok();
            })
            .await?;
            Ok(())
        }
        CMD_GENERATE if args.len() >= 4 => {
            let (city, issue) =
                split_city_words(&args[2..]).ok_or("generate needs a city and an issue")?;
            let request = GenerationRequest::new(city, issue);
            let spinner = create_spinner(
                "green",
                format!(
                    "Generating {} / {} with {}...",
                    request.city,
                    request.issue,
                    orchestrator.provider_names().join(", ")
                ),
            );
            let result = orchestrator.orchestrate(&request).await;
            spinner.finish_and_clear();

            print_response(&result?);
            Ok(())
        }
        _ => {
            print_help();
            Err(format!("unrecognized command: {}", args[1..].join(" ")).into())
        }
    }
}
