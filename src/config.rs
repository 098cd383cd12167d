use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::numeral::{AlphabetError, DigitAlphabet};

pub const DEFAULT_FACES: u32 = 6;
pub const DEFAULT_LANGUAGE_FILE: &str = "english.txt";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("can't read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no digit alphabet for a {0}-sided die, use 6 or 8")]
    UnsupportedFaces(u32),
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}

/// Session settings. Every field has a default, so an empty file is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Faces on the die, picks one of the preset alphabets.
    pub digits: u32,
    /// Custom face symbols. Takes precedence over `digits`.
    pub alphabet: Option<String>,
    pub language_file: PathBuf,
    /// Print the roll string on the line before the mnemonic.
    pub show_rolls: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            digits: DEFAULT_FACES,
            alphabet: None,
            language_file: PathBuf::from(DEFAULT_LANGUAGE_FILE),
            show_rolls: false,
        }
    }
}

/// Command-line values that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub digits: Option<u32>,
    pub language_file: Option<PathBuf>,
    pub show_rolls: bool,
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Read config from {}", path.display());
        Config::from_toml(&contents)
    }

    pub fn apply(mut self, overrides: Overrides) -> Config {
        // An explicit face count on the command line replaces a custom alphabet from the file.
        if let Some(digits) = overrides.digits {
            self.digits = digits;
            self.alphabet = None;
        }

        if let Some(language_file) = overrides.language_file {
            self.language_file = language_file;
        }

        self.show_rolls |= overrides.show_rolls;

        self
    }

    /// Builds the alphabet, failing on unknown face counts instead of guessing one.
    pub fn alphabet(&self) -> Result<DigitAlphabet, ConfigError> {
        match self.alphabet {
            Some(ref digits) => Ok(DigitAlphabet::new(digits)?),
            None => DigitAlphabet::preset(self.digits).ok_or(ConfigError::UnsupportedFaces(self.digits)),
        }
    }
}
