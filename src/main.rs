use clap::Parser;
use csv2json::core::ConfigProvider;
use csv2json::utils::{logger, validation::Validate};
use csv2json::{CliConfig, ConvertEngine, StreamingPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv2json CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let output_path = config.output_path();
    let pipeline = StreamingPipeline::new(config);
    let engine = ConvertEngine::new(pipeline);

    match engine.run().await {
        Ok(stats) => {
            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path.display());
            println!(
                "✅ Converted {} records ({} rows skipped)",
                stats.records_written, stats.rows_skipped
            );
            println!("📁 Output saved to: {}", output_path.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                csv2json::utils::error::ErrorSeverity::Low => 0,
                csv2json::utils::error::ErrorSeverity::Medium => 2,
                csv2json::utils::error::ErrorSeverity::High => 1,
                csv2json::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
