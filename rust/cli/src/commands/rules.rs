//! `rules`: list the configured rule table, as text or JSON.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_rules;
use std::io::Write;

pub fn handle_rules_command(json: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let rules = config::load()?.rules();
    if json {
        let s = serde_json::to_string_pretty(&rules).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        writeln!(out, "{}", format_rules(&rules))?;
    }
    Ok(())
}
