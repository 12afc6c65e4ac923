//! Small helpers for messages on the error stream.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Warn that a flag has no effect in the chosen mode.
pub fn warn_parameter_unused(
    err: &mut dyn Write,
    param_name: &str,
    mode: &str,
) -> std::io::Result<()> {
    writeln!(
        err,
        "WARNING: Parameter --{} is not used in {} mode.",
        param_name, mode
    )
}
