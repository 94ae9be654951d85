use clap::Parser;
use cpf_function::app;
use cpf_function::utils::logger;
use cpf_function::CliConfig;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cpf-function CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let outcome = app::run(&config, &mut std::io::stdout()).await;

    if let Err(e) = &outcome {
        tracing::error!(
            "❌ CPF validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
    }

    let exit_code = app::exit_code(&outcome);
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
