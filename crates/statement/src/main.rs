use clap::Parser;

use playbill_statement::StatementConfig;

fn main() -> anyhow::Result<()> {
    let config = StatementConfig::parse();
    playbill_observability::init(config.log_format);

    let output = playbill_statement::run(&config).inspect_err(|err| {
        tracing::error!(error = %format!("{err:#}"), "statement run failed");
    })?;

    print!("{output}");
    Ok(())
}
