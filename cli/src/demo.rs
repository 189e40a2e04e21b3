//! The construction demo and argument conversion loop.

use std::io::{self, Write};

use anyhow::{Context, Result};
use intconv_types::convert_to_int;

/// Line written when a [`Demo`] is constructed.
pub(crate) const CONSTRUCTION_MESSAGE: &str = "constructor called";

/// Literal the demo converts after construction.
const DEMO_LITERAL: &str = "1";

/// Exists only to show a construction side effect.
///
/// Not constructible outside this module except through [`Demo::new`].
#[derive(Debug)]
pub(crate) struct Demo {
    _private: (),
}

impl Demo {
    pub(crate) fn new(out: &mut impl Write) -> io::Result<Self> {
        writeln!(out, "{CONSTRUCTION_MESSAGE}")?;
        Ok(Self { _private: () })
    }
}

/// Construct a [`Demo`] and print the value of the demo literal.
pub(crate) fn run_demo(out: &mut impl Write) -> Result<()> {
    tracing::debug!("starting demo");
    let _demo = Demo::new(out).context("failed to write construction message")?;
    let value = convert_to_int(DEMO_LITERAL)?;
    writeln!(out, "{value}")?;
    Ok(())
}

/// Run the demo, then convert and print each argument in order.
///
/// Stops at the first argument that fails to convert.
pub(crate) fn run(args: &[String], out: &mut impl Write) -> Result<()> {
    run_demo(out)?;

    for (position, arg) in args.iter().enumerate() {
        tracing::debug!(position, arg = %arg, "converting argument");
        let value = convert_to_int(arg)
            .with_context(|| format!("failed to convert argument {} ({arg:?})", position + 1))?;
        writeln!(out, "{value}")?;
    }

    Ok(())
}
