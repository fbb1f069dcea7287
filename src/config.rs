use std::{fs::File, io::BufReader, path::{Path, PathBuf}};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use crate::engine::DEFAULT_ALTERNATIVES;

const DEFAULT_BASE_NOTE: isize = 60;
const DEFAULT_KEYS: &str = "awsedftgyhujkolp";

/// Keys taken by the display's own controls.
const RESERVED_KEYS: [char; 2] = ['P', 'Q'];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read config file {}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Keyboard key row is empty")]
    NoKeys,

    #[error("Key '{0}' is mapped more than once")]
    RepeatedKey(char),

    #[error("Key '{0}' is reserved for controls")]
    ReservedKey(char),

    #[error("Must show at least one alternative")]
    NoAlternatives,
}

#[derive(Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Note played by the first key in the row.
    pub base_note: isize,

    #[serde(deserialize_with = "from_key_row")]
    pub keys: Vec<char>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        KeyboardConfig {
            base_note: DEFAULT_BASE_NOTE,
            keys: DEFAULT_KEYS.chars().collect(),
        }
    }
}

impl KeyboardConfig {
    /// The note a key plays, if it's in the row.
    pub fn note_for(&self, key: char) -> Option<isize> {
        self.keys.iter()
            .position(|k| *k == key)
            .and_then(|i| self.base_note.checked_add(i as isize))
    }
}

/// Lets us write the key row as one string in yaml,
/// e.g. "awsedf" or "a w s e d f"
fn from_key_row<'de, D>(deserializer: D) -> Result<Vec<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let row: String = Deserialize::deserialize(deserializer)?;
    Ok(row.chars().filter(|c| !c.is_whitespace()).collect())
}

#[derive(Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub keyboard: KeyboardConfig,

    /// How many alternative readings to show.
    pub alternatives: usize,

    /// MIDI input port to connect on start.
    pub midi_port: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keyboard: KeyboardConfig::default(),
            alternatives: DEFAULT_ALTERNATIVES,
            midi_port: None,
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("chordlens").join("config.yaml"))
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let file = File::open(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let reader = BufReader::new(file);
        let config: Config = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, which must exist, or else
    /// from the default location, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            log::info!("Loading config from {}", path.display());
            return Config::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading config from {}", path.display());
                Config::from_file(&path)
            }
            _ => {
                log::info!("No config file, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyboard.keys.is_empty() {
            return Err(ConfigError::NoKeys);
        }
        for (i, key) in self.keyboard.keys.iter().enumerate() {
            if RESERVED_KEYS.contains(key) {
                return Err(ConfigError::ReservedKey(*key));
            }
            if self.keyboard.keys[..i].contains(key) {
                return Err(ConfigError::RepeatedKey(*key));
            }
        }
        if self.alternatives == 0 {
            return Err(ConfigError::NoAlternatives);
        }
        Ok(())
    }
}
