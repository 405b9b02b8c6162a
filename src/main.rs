use clap::Parser;

use avail_report::core::ConfigProvider;
use avail_report::utils::{logger, validation::Validate};
use avail_report::{CliConfig, LocalStorage, ReportEngine, ReportPipeline, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting avail-report CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config_path = cli.config.clone();
    match config_path {
        Some(path) => {
            // TOML 配置優先於命令列旗標
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Cannot load configuration: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(e.severity().exit_code());
                }
            };
            run_report(config).await;
        }
        None => run_report(cli).await,
    }

    Ok(())
}

async fn run_report<C: ConfigProvider + Validate + 'static>(config: C) {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let input_file = config.input_file().to_string();

    // 建立儲存與管線
    let storage = LocalStorage::new(config.base_path().to_string());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Availability report completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Availability report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) if e.is_missing_input() => {
            // 找不到輸入檔是預期中的失敗，走獨立的結束路徑
            eprintln!("File '{}' not found", input_file);
            std::process::exit(e.severity().exit_code());
        }
        Err(e) => {
            tracing::error!(
                "❌ Report run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
