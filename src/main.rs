use clap::Parser;
use urvip_client::utils::{logger, validation::Validate};
use urvip_client::{CliConfig, FormApi, HttpFormApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting urvip-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let params = config.form_params()?;
    let api = HttpFormApi::new();

    match api.post_form(&config.endpoint, &params).await {
        Ok(value) => {
            tracing::info!("Request completed");
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
