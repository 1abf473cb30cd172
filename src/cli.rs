use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use records_cli::app::ExportArgs;
use records_cli::config::ConfigOverrides;
use records_cli::form::Parameter;
use records_cli::records::CsvQuoting;

#[derive(Parser, Debug)]
#[command(name = "records-cli")]
#[command(about = "Query call and voicemail records by date range and export them as CSV")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file with config overrides
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Records endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Delay before each request, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Where the CSV export is written
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Quote CSV fields that contain commas, quotes or newlines
    #[arg(long, global = true)]
    pub quoted: bool,

    /// Log file used by the interactive form
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form (default)
    Interactive,

    /// Fetch once and write the CSV without opening the form
    Export(ExportCommand),
}

#[derive(Args, Debug)]
pub struct ExportCommand {
    #[arg(long)]
    pub start_date: String,

    #[arg(long)]
    pub end_date: String,

    /// One of phone, voicemail, user_id, cluster_id
    #[arg(long)]
    pub parameter: Parameter,

    #[arg(long)]
    pub value: String,
}

impl From<ExportCommand> for ExportArgs {
    fn from(cmd: ExportCommand) -> Self {
        ExportArgs {
            start_date: cmd.start_date,
            end_date: cmd.end_date,
            parameter: cmd.parameter,
            value: cmd.value,
        }
    }
}

impl Cli {
    /// Flags given on the command line, layered over the config file.
    pub fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            delay_ms: self.delay_ms,
            export_path: self.output.clone(),
            quoting: self.quoted.then_some(CsvQuoting::Quoted),
            log_file: self.log_file.clone(),
            ..ConfigOverrides::default()
        }
    }
}
