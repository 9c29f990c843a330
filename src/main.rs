use anyhow::Context;
use clap::Parser;
use pg_interval::utils::error::IntervalError;
use pg_interval::utils::{logger, validation::Validate};
use pg_interval::{CliConfig, CommandRunner};
use std::io::Write;

fn exit_code(e: &IntervalError) -> i32 {
    if e.is_parse_error() {
        2
    } else {
        1
    }
}

fn fail(e: IntervalError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    if let Err(e) = config.validate() {
        fail(e);
    }

    let runner = CommandRunner::new(config);
    let output = match runner.run(&cli.command) {
        Ok(output) => output,
        Err(e) => fail(e),
    };

    writeln!(std::io::stdout(), "{}", output).context("failed to write result to stdout")?;
    Ok(())
}
