mod cli;

use std::process::ExitCode;

use clap::Parser;

use records_cli::app::{run_export, run_interactive};
use records_cli::config::Config;
use records_cli::fetch::RecordsClient;
use records_cli::logging::{init_logging, LogTarget};
use records_cli::Result;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let overrides = cli.to_overrides();
    let config = Config::resolve(cli.config.as_deref(), overrides)?;

    match cli.command {
        None | Some(Commands::Interactive) => {
            init_logging(&LogTarget::File(config.log_file.clone()))?;
            run_interactive(config).await
        }
        Some(Commands::Export(cmd)) => {
            init_logging(&LogTarget::Stderr)?;
            let client = RecordsClient::from_config(&config);
            let summary = run_export(&config, &client, cmd.into()).await?;
            println!(
                "Saved {} rows to {}",
                summary.rows,
                summary.path.display()
            );
            Ok(())
        }
    }
}
