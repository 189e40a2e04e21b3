//! intconv CLI - binary entry point.
//!
//! ```text
//! main() -> Settings::from_env() -> init_tracing() -> demo::run(args, stdout)
//!                                                        |
//!                                                        v
//!                        "constructor called", "1", then one value per argument
//! ```
//!
//! Stdout carries only converted values and the construction line. Logs go to
//! stderr so the output stays machine-readable. Any conversion failure is
//! returned from `main`, which reports it on stderr and exits non-zero.

mod demo;
mod settings;

use anyhow::{Result, anyhow};
use std::{
    env,
    io::{self, Write},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use settings::Settings;

fn init_tracing(settings: &Settings, init_warnings: &[String]) {
    let env_filter = settings
        .rust_log()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(settings.log_level().into()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();

    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
}

fn collect_args() -> Result<Vec<String>> {
    env::args_os()
        .skip(1)
        .map(|raw| {
            raw.into_string().map_err(|raw| {
                anyhow!(
                    "argument is not valid UTF-8: {}",
                    raw.to_string_lossy()
                )
            })
        })
        .collect()
}

fn main() -> Result<()> {
    let (settings, init_warnings) = Settings::from_env();
    init_tracing(&settings, &init_warnings);

    let args = collect_args()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&args, &mut out)?;
    out.flush()?;

    Ok(())
}
