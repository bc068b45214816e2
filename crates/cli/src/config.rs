use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use glosskit_core::MergeOption;
use serde::Deserialize;

/// Raw `glosskit.toml` layout, straight from the deserializer. Markers are
/// strings here so a multi-character value can be rejected with a clear
/// message instead of a type error.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsSection,
    #[serde(default)]
    secondary: SecondarySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsSection {
    min_key_len: Option<usize>,
    split: Option<String>,
    join: Option<String>,
    option: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SecondarySection {
    split: Option<String>,
}

/// Validated configuration. Explicit CLI flags still win over everything
/// here; these are the fallbacks below them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Config {
    pub min_key_len: usize,
    pub split: char,
    pub join: char,
    pub option: MergeOption,
    pub secondary_split: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_key_len: 1,
            split: '/',
            join: '/',
            option: MergeOption::default(),
            secondary_split: '¦',
        }
    }
}

/// Loads `--config PATH`, or `./glosskit.toml` when present, or defaults.
/// An explicitly named config that cannot be read is an error; the
/// implicit one is optional.
pub(crate) fn load(path: Option<&Path>) -> Result<Config> {
    let (raw, source) = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            (raw, path.display().to_string())
        }
        None => match fs::read_to_string("glosskit.toml") {
            Ok(raw) => (raw, "glosskit.toml".to_string()),
            Err(_) => return Ok(Config::default()),
        },
    };

    let file: ConfigFile =
        toml::from_str(&raw).with_context(|| format!("Invalid config {source}"))?;
    let config = validate(file).with_context(|| format!("Invalid config {source}"))?;
    log::debug!("loaded config from {source}");
    Ok(config)
}

fn validate(file: ConfigFile) -> Result<Config> {
    let mut config = Config::default();
    if let Some(min_key_len) = file.defaults.min_key_len {
        config.min_key_len = min_key_len;
    }
    if let Some(split) = &file.defaults.split {
        config.split = single_char(split, "defaults.split")?;
    }
    if let Some(join) = &file.defaults.join {
        config.join = single_char(join, "defaults.join")?;
    }
    if let Some(option) = &file.defaults.option {
        config.option = MergeOption::from_str(option)?;
    }
    if let Some(split) = &file.secondary.split {
        config.secondary_split = single_char(split, "secondary.split")?;
    }
    Ok(config)
}

fn single_char(value: &str, field: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("{field} must be a single character, got {value:?}"),
    }
}
