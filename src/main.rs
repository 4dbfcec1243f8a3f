use clap::Parser;
use feed_aggregator::utils::{logger, validation::Validate};
use feed_aggregator::{
    Aggregator, ApiClient, CliConfig, ConfigProvider, FeedError, HttpTransport,
    PostWithCommentsAndAuthors, TomlConfig,
};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting feed-aggregator");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            if let Err(e) = file_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(file_config)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(cli.clone())
        }
    };

    let run_timeout = config.run_timeout();
    match tokio::time::timeout(run_timeout, run(config.as_ref())).await {
        Ok(Ok(feed)) => {
            tracing::info!("✅ Aggregated {} posts", feed.len());
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
        Ok(Err(e)) => {
            tracing::error!("❌ Aggregation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(_) => {
            // Expiry cancels every in-flight fetch; nothing is left running.
            tracing::error!("❌ Aggregation abandoned after {:?}", run_timeout);
            eprintln!("❌ Aggregation abandoned after {:?}", run_timeout);
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn run(
    config: &dyn ConfigProvider,
) -> feed_aggregator::Result<Vec<PostWithCommentsAndAuthors>> {
    let base = Url::parse(config.base_url()).map_err(|e| FeedError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: config.base_url().to_string(),
        reason: e.to_string(),
    })?;

    let transport = HttpTransport::new(config.connect_timeout())?;
    let api = ApiClient::new(transport, base);
    let aggregator = Aggregator::new(api).with_concurrent_requests(config.concurrent_requests());

    aggregator.aggregate().await
}
