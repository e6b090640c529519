use clap::Parser;
use compare_role_permissions::app;
use compare_role_permissions::utils::logger;
use compare_role_permissions::CliConfig;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting compare-roles");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app::run(&config, &mut stdout).await {
        tracing::error!(
            "❌ Role comparison failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(app::exit_code(&e));
    }
}
