use std::io::Write;

use hello_base::{HelloResult, ResultExt};
use tracing::{debug, instrument};

use crate::greeting::{DEFAULT_NAME, greet};

/// Writes the greeting for [`DEFAULT_NAME`] as a single line to `out`.
///
/// The only failure is `out` refusing the write or the flush.
#[instrument(skip(out))]
pub fn run<W: Write>(out: &mut W) -> HelloResult<()> {
    let greeting = greet(DEFAULT_NAME);
    debug!(len = greeting.len(), "greeting built");
    writeln!(out, "{greeting}")
        .and_then(|()| out.flush())
        .context("writing greeting to stdout")
}
