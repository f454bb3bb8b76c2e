// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::TracingConfig;

#[derive(Debug, Parser)]
#[command(bin_name = "apm")]
#[command(about = "🛒 Manage a product catalogue, one action at a time")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "path",
        help = "Log file to use with --enable-logging, defaults to `apm_log.txt`"
    )]
    pub log_file: Option<String>,

    #[arg(
        global = true,
        long,
        value_name = "path",
        help = "JSON file with the products to start with, instead of the demo catalogue"
    )]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🎬 Walk through logging in, browsing, and editing products")]
    Demo,

    #[clap(
        about = "📼 Dispatch the actions in a file, one JSON action per line\n💡 Eg: {\"type\": \"SET_PRODUCT_FILTER\", \"payload\": \"saw\"}"
    )]
    Replay {
        #[arg(value_name = "file")]
        file: PathBuf,
    },
}

impl GlobalOption {
    /// Logging goes to the log file only, so it doesn't get mixed up with the output.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if self.enable_logging {
            TracingConfig::new_file(self.log_file.clone())
        } else {
            TracingConfig::default()
        }
    }
}
