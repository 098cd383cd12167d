use itertools::Itertools;
use std::fmt;

pub const D6_DIGITS: &str = "123456";
pub const D8_DIGITS: &str = "12345678";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("digits need to be unique, '{0}' appears more than once")]
    DuplicateAlphabetDigit(char),
    #[error("an alphabet needs at least 2 digits, got {0}")]
    AlphabetTooSmall(usize),
}

/// The face symbols of a die, in numeral order. A symbol's position is its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitAlphabet {
    symbols: Vec<char>,
}

impl DigitAlphabet {
    pub fn new(digits: &str) -> Result<DigitAlphabet, AlphabetError> {
        let symbols: Vec<char> = digits.chars().collect();

        if let Some(repeated) = symbols.iter().duplicates().next() {
            return Err(AlphabetError::DuplicateAlphabetDigit(*repeated));
        }

        // Base 1 has no positional representation.
        if symbols.len() < 2 {
            return Err(AlphabetError::AlphabetTooSmall(symbols.len()));
        }

        Ok(DigitAlphabet {
            symbols,
        })
    }

    /// Recognized face counts. Anything else has no preset.
    pub fn preset(faces: u32) -> Option<DigitAlphabet> {
        let digits = match faces {
            6 => D6_DIGITS,
            8 => D8_DIGITS,
            _ => return None,
        };

        Some(DigitAlphabet {
            symbols: digits.chars().collect(),
        })
    }

    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    pub fn value_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.value_of(symbol).is_some()
    }

    pub fn symbol(&self, value: usize) -> char {
        self.symbols[value]
    }
}

impl fmt::Display for DigitAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }

        Ok(())
    }
}
