//! Interactive todo-list binary.
//!
//! # Responsibility
//! - Resolve configuration, start file logging and open the default store.
//! - Run the command loop on stdin/stdout and map its result to an exit code.

mod app;
mod command;
mod config;

use config::Config;
use log::{error, info};
use std::io;
use std::process::ExitCode;
use toodoo_core::{core_version, init_logging, FileTodoStore, TodoManager};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("toodoo: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Logging is optional; the loop still works without a log directory.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir()) {
        eprintln!("toodoo: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={} data_dir={}",
        core_version(),
        config.data_dir.display()
    );

    let mut manager = TodoManager::new(FileTodoStore::new(config.store_path()));
    let stdin = io::stdin();
    let stdout = io::stdout();

    match app::run(&mut manager, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(exit) => {
            info!("event=cli_exit module=cli status=ok reason={exit:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("toodoo: {err}");
            ExitCode::FAILURE
        }
    }
}
