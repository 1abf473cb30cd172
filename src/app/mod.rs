pub mod controller;
pub mod headless;
pub mod state;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::RecordsClient;

pub use controller::{AppController, Command};
pub use headless::{run_export, ExportArgs, ExportSummary};
pub use state::{AppState, Focus, Status};

/// Run the form until the user quits.
pub async fn run_interactive(config: Config) -> Result<()> {
    let source = Arc::new(RecordsClient::from_config(&config));
    AppController::new(config, source).run().await
}
