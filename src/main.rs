use clap::Parser;
use route_distance_etl::core::ConfigProvider;
use route_distance_etl::utils::{logger, validation::Validate};
use route_distance_etl::{CliConfig, EtlEngine, LocalStorage, RoutePipeline, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting route-distance-etl");

    let config_path = cli.config.clone();
    let outcome = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => run(config.with_fallback_api_key(cli.api_key.clone())).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli).await,
    };

    match outcome {
        Ok(output_path) => {
            println!("Results have been written to {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("Error: {}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: C) -> route_distance_etl::Result<String> {
    config.validate()?;
    tracing::debug!(
        "Input: {}, output: {}, endpoint: {}",
        config.input_path(),
        config.output_path(),
        config.api_endpoint()
    );

    let pipeline = RoutePipeline::with_http_client(LocalStorage::current_dir(), config);
    EtlEngine::new(pipeline).run().await
}
