use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

/// What to do with a line that fails to parse or describes an impossible game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnInvalid {
    Fail,
    Skip,
}

impl FromStr for OnInvalid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(OnInvalid::Fail),
            "skip" => Ok(OnInvalid::Skip),
            _ => Err(anyhow!(
                "on_invalid must be either \"fail\" or \"skip\", found {:?}",
                s
            )),
        }
    }
}

impl Display for OnInvalid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OnInvalid::Fail => write!(f, "fail"),
            OnInvalid::Skip => write!(f, "skip"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ToolOptions {
    /// Search times strictly greater than this pass `filter-time`.
    pub min_time: i64,
    pub on_invalid: OnInvalid,
    /// Log progress every this many written lines. Zero turns progress logging off.
    pub progress_interval: usize,
    /// `dedup` also drops positions whose left-right reflection was already kept.
    pub mirrors: bool,
}

/// Values given on the command line. They take precedence over the config file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    pub min_time: Option<i64>,
    pub skip_invalid: bool,
    pub mirrors: bool,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            min_time: 100,
            on_invalid: OnInvalid::Fail,
            progress_interval: 10_000,
            mirrors: false,
        }
    }
}

impl ToolOptions {
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(min_time) = overrides.min_time {
            self.min_time = min_time;
        }

        if overrides.skip_invalid {
            self.on_invalid = OnInvalid::Skip;
        }

        if overrides.mirrors {
            self.mirrors = true;
        }

        self
    }
}

/// Loads the options for the tool named `scope`, from `config` when given, then applies the
/// command line overrides.
pub fn load_options(
    config: Option<&Path>,
    scope: &str,
    overrides: &Overrides,
) -> Result<ToolOptions> {
    let config = match config {
        Some(path) => ConfigLoader::new(path, scope.to_string())?,
        None => ConfigLoader::without_file(scope.to_string())?,
    };

    let options: ToolOptions = config.load()?;

    Ok(options.with_overrides(overrides))
}

impl Config for ToolOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        let on_invalid = match config.get("on_invalid").and_then(|v| v.as_string()) {
            Some(value) => value.parse()?,
            None => defaults.on_invalid,
        };

        Ok(Self {
            min_time: config
                .get("min_time")
                .and_then(|v| v.as_i64())
                .unwrap_or(defaults.min_time),
            on_invalid,
            progress_interval: config
                .get("progress_interval")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.progress_interval),
            mirrors: config
                .get("mirrors")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.mirrors),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = ConfigLoader::without_file("convert".to_string()).unwrap();

        let options: ToolOptions = config.load().unwrap();

        assert_eq!(options, ToolOptions::default());
        assert_eq!(options.min_time, 100);
        assert_eq!(options.on_invalid, OnInvalid::Fail);
    }

    #[test]
    fn test_load_scoped_values() {
        let config = ConfigLoader::from_config_str(
            r#"
            on_invalid = "skip"
            filter_time { min_time = 250 }
            "#,
            "filter_time".to_string(),
        )
        .unwrap();

        let options: ToolOptions = config.load().unwrap();

        assert_eq!(options.min_time, 250);
        assert_eq!(options.on_invalid, OnInvalid::Skip);
        assert_eq!(options.progress_interval, 10_000);
    }

    #[test]
    fn test_unknown_on_invalid_is_rejected() {
        let config = ConfigLoader::from_config_str(r#"on_invalid = "ignore""#, "dedup".to_string())
            .unwrap();

        assert!(config.load::<ToolOptions>().is_err());
    }

    #[test]
    fn test_load_mirrors() {
        let config =
            ConfigLoader::from_config_str("dedup { mirrors = true }", "dedup".to_string()).unwrap();

        assert!(config.load::<ToolOptions>().unwrap().mirrors);
    }

    #[test]
    fn test_command_line_beats_config() {
        let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        write!(
            file,
            r#"
            on_invalid = "fail"
            filter_time {{ min_time = 250 }}
            "#
        )
        .unwrap();

        let overrides = Overrides {
            min_time: Some(40),
            skip_invalid: true,
            mirrors: false,
        };

        let options = load_options(Some(file.path()), "filter_time", &overrides).unwrap();

        assert_eq!(options.min_time, 40);
        assert_eq!(options.on_invalid, OnInvalid::Skip);
        assert!(!options.mirrors);
    }

    #[test]
    fn test_config_applies_without_overrides() {
        let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        write!(file, "filter_time {{ min_time = 250 }}").unwrap();

        let options =
            load_options(Some(file.path()), "filter_time", &Overrides::default()).unwrap();

        assert_eq!(options.min_time, 250);
        assert_eq!(options.on_invalid, OnInvalid::Fail);
    }

    #[test]
    fn test_load_options_without_file() {
        let overrides = Overrides {
            mirrors: true,
            ..Overrides::default()
        };

        let options = load_options(None, "dedup", &overrides).unwrap();

        assert_eq!(
            options,
            ToolOptions {
                mirrors: true,
                ..ToolOptions::default()
            }
        );
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.conf");

        assert!(load_options(Some(&path), "dedup", &Overrides::default()).is_err());
    }

    #[test]
    fn test_on_invalid_from_str() {
        assert_eq!("Skip".parse::<OnInvalid>().unwrap(), OnInvalid::Skip);
        assert_eq!(" fail ".parse::<OnInvalid>().unwrap(), OnInvalid::Fail);
        assert_eq!(OnInvalid::Skip.to_string(), "skip");
    }
}
