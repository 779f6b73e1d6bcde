use std::path::PathBuf;

use crate::browser::DEFAULT_EXTENSIONS;
use crate::error::{PlayerError, Result};
use crate::history::DEFAULT_HISTORY_CAPACITY;

const HISTORY_ENV: &str = "RINGPLAY_HISTORY";
const EXTENSIONS_ENV: &str = "RINGPLAY_EXTENSIONS";

/// Player settings, layered as defaults < environment < command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub history_capacity: usize,
    pub extensions: Vec<String>,
    pub shuffle: bool,
    /// Folder to load at startup
    pub folder: Option<PathBuf>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            shuffle: false,
            folder: None,
        }
    }
}

impl PlayerConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup(HISTORY_ENV) {
            self.history_capacity = parse_capacity(HISTORY_ENV, &value)?;
        }
        if let Some(value) = lookup(EXTENSIONS_ENV) {
            self.extensions = parse_extensions(EXTENSIONS_ENV, &value)?;
        }
        Ok(())
    }

    /// Apply command line arguments (program name already skipped).
    ///
    /// Returns `Ok(false)` when help was requested.
    pub fn apply_args(&mut self, args: Vec<String>) -> Result<bool> {
        let mut index = 0;
        while index < args.len() {
            match args[index].as_str() {
                "--shuffle" => self.shuffle = true,
                "--history" => {
                    index += 1;
                    let value = args.get(index).ok_or(PlayerError::MissingArgument("--history"))?;
                    self.history_capacity = parse_capacity("--history", value)?;
                }
                "--ext" => {
                    index += 1;
                    let value = args.get(index).ok_or(PlayerError::MissingArgument("--ext"))?;
                    self.extensions = parse_extensions("--ext", value)?;
                }
                "-h" | "--help" => return Ok(false),
                other if other.starts_with('-') => {
                    return Err(PlayerError::UnknownCommand(other.to_string()));
                }
                folder => self.folder = Some(PathBuf::from(folder)),
            }
            index += 1;
        }
        Ok(true)
    }
}

fn parse_capacity(name: &'static str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| PlayerError::InvalidArgument {
            name,
            value: value.to_string(),
        })
}

fn parse_extensions(name: &'static str, value: &str) -> Result<Vec<String>> {
    let extensions: Vec<String> = value
        .split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();
    if extensions.is_empty() {
        return Err(PlayerError::InvalidArgument {
            name,
            value: value.to_string(),
        });
    }
    Ok(extensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_original_player() {
        let config = PlayerConfig::default();
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.extensions, ["mp3"]);
        assert!(!config.shuffle);
        assert!(config.folder.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut config = PlayerConfig::default();
        config
            .apply_env_with(|key| match key {
                "RINGPLAY_HISTORY" => Some("4".to_string()),
                "RINGPLAY_EXTENSIONS" => Some("MP3, .flac".to_string()),
                _ => None,
            })
            .expect("env");
        assert_eq!(config.history_capacity, 4);
        assert_eq!(config.extensions, ["mp3", "flac"]);
    }

    #[test]
    fn arguments_override_environment() {
        let mut config = PlayerConfig::default();
        config
            .apply_env_with(|key| (key == "RINGPLAY_HISTORY").then(|| "4".to_string()))
            .expect("env");
        let run = config
            .apply_args(args(&["--history", "7", "--shuffle", "--ext", "ogg", "/music"]))
            .expect("args");
        assert!(run);
        assert_eq!(config.history_capacity, 7);
        assert!(config.shuffle);
        assert_eq!(config.extensions, ["ogg"]);
        assert_eq!(config.folder, Some(PathBuf::from("/music")));
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut config = PlayerConfig::default();
        assert!(matches!(
            config.apply_args(args(&["--history", "lots"])),
            Err(PlayerError::InvalidArgument { name: "--history", .. })
        ));
        assert!(matches!(
            config.apply_args(args(&["--ext"])),
            Err(PlayerError::MissingArgument("--ext"))
        ));
        assert!(matches!(
            config.apply_args(args(&["--loud"])),
            Err(PlayerError::UnknownCommand(_))
        ));
        assert!(matches!(
            config.apply_env_with(|_| Some(",,".to_string())),
            Err(PlayerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn help_stops_parsing() {
        let mut config = PlayerConfig::default();
        assert!(!config.apply_args(args(&["--help", "/music"])).expect("args"));
        assert!(config.folder.is_none());
    }
}
