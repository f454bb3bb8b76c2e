// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{
    Layer, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

use crate::{DisplayPreference, TracingConfig, WriterConfig, try_create_log_file_appender};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed. Use this in the
/// binary. Does nothing if `tracing_config` is disabled.
///
/// # Errors
///
/// If the log file can't be opened, or a global subscriber is already set.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    if !tracing_config.is_enabled() {
        return Ok(());
    }

    let layers = try_create_layers(&tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|error| miette::miette!(format!("Can't initialize logging. {error}")))
}

/// Thread local subscriber, which is reset when the returned guard is dropped. Use this
/// in tests. Returns `None` if `tracing_config` is disabled.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    if !tracing_config.is_enabled() {
        return Ok(None);
    }

    let layers = try_create_layers(&tracing_config)?;
    Ok(Some(tracing_subscriber::registry().with(layers).set_default()))
}

/// Returns the layers, without installing them. The first one is the level filter, then
/// the display layer and the file layer, if configured.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    ) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _) | WriterConfig::Display(display_pref) => {
            match display_pref {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stdout)
                        .with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stderr)
                        .with_filter(level_filter),
                )),
            }
        }
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// No ANSI escapes in the file.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path) | WriterConfig::File(log_file_path) => {
            let file = try_create_log_file_appender(&log_file_path)?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
