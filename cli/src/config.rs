use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Settings driving the `run` command.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RunSettings {
    /// NNML document holding the net to drive.
    #[serde(default = "RunSettings::default_net")]
    pub net: PathBuf,
    /// Bit-string file holding the input pattern stream.
    #[serde(default = "RunSettings::default_patterns")]
    pub patterns: PathBuf,
    /// Optional destination for the produced output bit string; printed to
    /// stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl RunSettings {
    fn default_net() -> PathBuf {
        PathBuf::from("net.nnml")
    }

    fn default_patterns() -> PathBuf {
        PathBuf::from("input.bits")
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            net: Self::default_net(),
            patterns: Self::default_patterns(),
            output: None,
        }
    }
}

/// Settings driving the `train` command.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TrainSettings {
    /// NNML document holding the net to train.
    #[serde(default = "RunSettings::default_net")]
    pub net: PathBuf,
    /// Bit-string file holding the input pattern stream.
    #[serde(default = "RunSettings::default_patterns")]
    pub patterns: PathBuf,
    /// Bit-string file holding the desired output stream.
    #[serde(default = "TrainSettings::default_desired")]
    pub desired: PathBuf,
    /// Number of passes over the pattern stream.
    #[serde(default = "TrainSettings::default_epochs")]
    pub epochs: usize,
    /// Location where the trained net is written.
    #[serde(default = "TrainSettings::default_save")]
    pub save: PathBuf,
}

impl TrainSettings {
    fn default_desired() -> PathBuf {
        PathBuf::from("desired.bits")
    }

    fn default_epochs() -> usize {
        1
    }

    fn default_save() -> PathBuf {
        PathBuf::from("trained.nnml")
    }
}

impl Default for TrainSettings {
    fn default() -> Self {
        Self {
            net: RunSettings::default_net(),
            patterns: RunSettings::default_patterns(),
            desired: Self::default_desired(),
            epochs: Self::default_epochs(),
            save: Self::default_save(),
        }
    }
}

/// Loads TOML settings for the requested command, falling back to defaults
/// when no file is present.
pub fn load_settings<T>(command: &str, explicit: Option<PathBuf>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let (candidate, explicit_provided) = match explicit {
        Some(path) => (path, true),
        None => (PathBuf::from(format!("{command}.toml")), false),
    };

    if candidate.exists() {
        let raw = std::fs::read_to_string(&candidate).with_context(|| {
            format!(
                "failed to read configuration for `{command}` from {}",
                candidate.display()
            )
        })?;
        let parsed = toml::from_str(&raw).with_context(|| {
            format!(
                "failed to parse TOML configuration for `{command}` at {}",
                candidate.display()
            )
        })?;
        Ok(parsed)
    } else if explicit_provided {
        bail!(
            "configuration file for `{command}` not found at {}",
            candidate.display()
        );
    } else {
        Ok(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn load_settings_returns_default_when_missing() {
        let settings: TrainSettings = load_settings("train", None).expect("default settings");
        assert_eq!(settings, TrainSettings::default());
    }

    #[test]
    fn load_settings_errors_for_missing_explicit_path() {
        let result: Result<TrainSettings> =
            load_settings("train", Some(PathBuf::from("definitely_missing.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn load_settings_parses_toml_payload() {
        let file = NamedTempFile::new().expect("temp file");
        let path = file.into_temp_path();
        std::fs::write(
            &path,
            r#"net = "nets/and.nnml"
patterns = "streams/and-input.bits"
desired = "streams/and-desired.bits"
epochs = 5
"#,
        )
        .expect("write config");

        let settings: TrainSettings =
            load_settings("train", Some(path.to_path_buf())).expect("parsed settings");
        assert_eq!(settings.net, PathBuf::from("nets/and.nnml"));
        assert_eq!(settings.patterns, PathBuf::from("streams/and-input.bits"));
        assert_eq!(settings.desired, PathBuf::from("streams/and-desired.bits"));
        assert_eq!(settings.epochs, 5);
        assert_eq!(settings.save, TrainSettings::default_save());
    }
}
