// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `apm` runs the product management state core from the command line.
//! - `apm demo` walks through logging in, browsing, editing, adding, and deleting.
//! - `apm replay <file>` dispatches the JSON actions in a file, one per line.

use apm::{
    CLIArg, CLICommand, ProductEffects, create_store, run_demo, try_create_product_service,
    try_initialize_logging_global, try_replay_file,
};
use clap::Parser;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    try_initialize_logging_global(cli_arg.global_options.tracing_config())?;
    if enable_logging {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let service = try_create_product_service(cli_arg.global_options.seed.as_deref())?;
    let effects = ProductEffects::new(service);
    let mut store = create_store();
    let mut stdout = std::io::stdout().lock();

    let result = match &cli_arg.command {
        CLICommand::Demo => run_demo(&mut store, &effects, &mut stdout).await,
        CLICommand::Replay { file } => try_replay_file(&mut store, &effects, file, &mut stdout)
            .await
            .map(|replayed| {
                // % is Display, ? is Debug.
                tracing::debug!(message = "Replay done", replayed = %replayed);
            }),
    };

    if let Err(error) = &result {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not run apm", error = ?error);
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    result
}
