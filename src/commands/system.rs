// src/commands/system.rs
//! System-level commands: init, completions

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use tracing::info;

/// Create the database, or bring an existing one up to date
pub fn cmd_init(db_path: &str) -> Result<()> {
    info!("Initializing recipe database at: {}", db_path);
    recetario::db::init(db_path)?;
    println!("Database initialized successfully at: {}", db_path);
    Ok(())
}

/// Print a completion script for `shell`
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "recetario", &mut std::io::stdout());
    Ok(())
}
