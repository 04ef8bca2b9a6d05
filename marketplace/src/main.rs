use clap::Parser;
use marketplace::cli::{self, Cli};
use marketplace::{Marketplace, RecordingNotifier, setup_environment};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. 解析命令行
    let args = Cli::parse();

    // 2. 设置环境 (dotenv, 配置, 日志)
    let mut config = setup_environment()?;
    args.apply_overrides(&mut config);

    // 3. 打开存储并加载商品和订单
    let notifier = Arc::new(RecordingNotifier::new());
    let market = Marketplace::open(config, notifier.clone())?;

    // 4. 执行命令，然后输出提示
    let outcome = cli::execute(&market, args.command).await;
    for notification in notifier.drain() {
        println!("{}", cli::render_notification(&notification));
    }

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!(error = %e, error_code = %e.code(), "Command failed");
            eprintln!("error[{}]: {}", e.code(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}
