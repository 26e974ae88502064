pub mod args;
pub mod shell;
pub mod transport;

use std::io;

use anyhow::{Context, Result};
use todo_core::{TodoApi, TodoClient, TodoListController};
use tracing::{debug, info};

use crate::args::Args;
use crate::transport::UreqTransport;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting todo-view with arguments");

    let client = TodoClient::new(&args.base_url);
    info!(base_url = client.base_url(), "Using todo API");
    let api = TodoApi::new(client, UreqTransport::new());
    let mut controller = TodoListController::new(api);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run_shell(&mut controller, stdin.lock(), &mut stdout).context("terminal I/O failed")
}
