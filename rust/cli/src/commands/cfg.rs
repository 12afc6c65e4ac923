//! `cfg`: print the resolved configuration as JSON, each value paired with
//! its source (`default`, `file` or `env`).

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "dice": { "value": config.dice, "source": sources.dice },
        "sides": { "value": config.sides, "source": sources.sides },
        "max_rolls": { "value": config.max_rolls, "source": sources.max_rolls },
        "seed": { "value": config.seed, "source": sources.seed },
        "ai": { "value": config.ai, "source": sources.ai },
        "fibonyahtzee": { "value": config.fibonyahtzee, "source": sources.fibonyahtzee },
        "custom_rules": { "value": config.custom_rules, "source": sources.custom_rules },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfg_prints_values_with_sources() {
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        for key in ["dice", "sides", "max_rolls", "seed", "ai", "fibonyahtzee", "custom_rules"] {
            assert!(json[key].get("value").is_some(), "missing value for {key}");
            assert!(json[key]["source"].is_string(), "missing source for {key}");
        }
    }
}
