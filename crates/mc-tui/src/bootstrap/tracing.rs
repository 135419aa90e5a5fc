//! Tracing configuration for multiclip
//!
//! ## Architecture / 架构
//!
//! - **Console layer**: human-readable lines on stdout, routed through a
//!   [`ConsoleGate`] so they can be silenced while the viewer owns the screen
//! - **File layer**: everything, always, in `<data_dir>/logs/multiclip.log`
//! - **Environment-aware**: `debug` in debug builds, `info` in release,
//!   `RUST_LOG` overrides both

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::writer::EitherWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "multiclip.log";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Switch between stdout and a sink for the console log layer.
///
/// Raw-mode terminal output and log lines cannot share the screen, so the
/// viewer suppresses the console while it is visible.
#[derive(Debug, Clone, Default)]
pub struct ConsoleGate {
    suppressed: Arc<AtomicBool>,
}

impl ConsoleGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress(&self) {
        self.suppressed.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.suppressed.store(false, Ordering::SeqCst);
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.load(Ordering::SeqCst)
    }
}

impl<'a> MakeWriter<'a> for ConsoleGate {
    type Writer = EitherWriter<io::Stdout, io::Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.is_suppressed() {
            EitherWriter::B(io::sink())
        } else {
            EitherWriter::A(io::stdout())
        }
    }
}

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// `global_hotkey` is kept at `warn`: its X11 thread is chatty at debug.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("mc_platform={level}"),
        format!("mc_infra={level}"),
        "global_hotkey=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once, before any other logging. Without `logs_dir`, or when the
/// log file cannot be opened, only the console layer is installed.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>, gate: ConsoleGate) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to console only: {err:#}");
            None
        }
    };

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_level(true)
        .with_target(false)
        .with_ansi(cfg!(not(test)))
        .with_writer(gate);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log dir: {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
