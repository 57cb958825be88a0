use clap::Parser;
use twitter_adapter::utils::error::{AdapterError, ErrorSeverity};
use twitter_adapter::utils::logger;
use twitter_adapter::{AdapterFactory, CliConfig, CredentialsProvider, TwitterAdapterFactory};

fn exit_code(e: &AdapterError) -> i32 {
    match e.severity() {
        ErrorSeverity::High => 1,     // 設定錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn fail(e: AdapterError) -> ! {
    tracing::error!(
        "❌ Adapter construction failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 設定檔要先讀，log 格式可能由它決定
    let merged = args.resolve();

    let config = match merged {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(false, None);
            fail(e);
        }
    };

    if config.json_logs {
        logger::init_json_logger(config.verbose, config.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, config.log_level.as_deref());
    }

    tracing::info!("🚀 Starting twitter-adapter");
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }

    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => fail(e),
    };
    tracing::debug!("Credentials: {:?}", credentials);

    let factory = match TwitterAdapterFactory::try_current() {
        Ok(factory) => factory,
        Err(e) => fail(e),
    };
    let adapter = match factory.construct(credentials) {
        Ok(adapter) => adapter,
        Err(e) => fail(e),
    };

    tracing::info!("✅ Twitter adapter constructed: {}", adapter.id());
    println!("✅ Twitter adapter constructed: {}", adapter.id());

    Ok(())
}
