use byteorder::{BigEndian, ByteOrder};
use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::One;
use sha2::{Digest, Sha256};
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::numeral::{self, DigitAlphabet, NumeralError};

pub use self::wordlist::WordList;

pub mod wordlist;


pub const ENTROPY_BITS: usize = 256;
pub const ENTROPY_SIZE: usize = ENTROPY_BITS / 8;
pub const CHECKSUM_BITS: usize = 8;
pub const SEED_BITS: usize = ENTROPY_BITS + CHECKSUM_BITS;
pub const WORD_BITS: usize = 11;
pub const MNEMONIC_SIZE: usize = SEED_BITS / WORD_BITS;
pub const WORDLIST_SIZE: usize = 2048;

const WORD_MASK: u32 = 0x7FF;

#[derive(Debug, thiserror::Error)]
pub enum BIP39Error {
    #[error("'{0}' is not a digit of this alphabet")]
    InvalidDigit(char),
    #[error("word index {index} is out of range for a word list of {len} words")]
    WordListTooShort { index: usize, len: usize },
    #[error("can't read word list {}: {source}", .path.display())]
    WordListFileMissing { path: PathBuf, source: io::Error },
    #[error("rolls encode {bits} bits of entropy, which doesn't fit in 256 bits")]
    EntropyTooWide { bits: u64 },
}

impl From<NumeralError> for BIP39Error {
    fn from(value: NumeralError) -> BIP39Error {
        match value {
            NumeralError::InvalidDigit(c) => BIP39Error::InvalidDigit(c),
        }
    }
}

/// What to do when the rolls spell a number that doesn't fit in 256 bits.
///
/// A full set of rolls can exceed 2^256 - 1 for most alphabets (a d6 can reach 259 bits),
/// so rejecting is only useful when the caller controls the value, never for live dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Keep the low-order 256 bits.
    Truncate,
    Reject,
}

impl Default for WidthPolicy {
    fn default() -> WidthPolicy {
        WidthPolicy::Truncate
    }
}

/// First byte of SHA-256 over the big-endian entropy.
pub fn checksum_byte(entropy: &[u8; ENTROPY_SIZE]) -> u8 {
    Sha256::digest(entropy)[0]
}

/// 256 entropy bits followed by their 8 checksum bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedBits {
    entropy: [u8; ENTROPY_SIZE],
    checksum: u8,
}

impl SeedBits {
    pub fn from_entropy(value: &BigUint, policy: WidthPolicy) -> Result<SeedBits, BIP39Error> {
        let bits = value.bits();

        let value = if bits as usize > ENTROPY_BITS {
            match policy {
                WidthPolicy::Reject => return Err(BIP39Error::EntropyTooWide { bits }),
                WidthPolicy::Truncate => value & &((BigUint::one() << ENTROPY_BITS) - BigUint::one()),
            }
        } else {
            value.clone()
        };

        // Left-pad to 32 bytes. to_bytes_be() never yields more than that after fitting.
        let bytes = value.to_bytes_be();
        let mut entropy = [0u8; ENTROPY_SIZE];
        entropy[ENTROPY_SIZE - bytes.len()..].copy_from_slice(&bytes);

        Ok(SeedBits::from_bytes(entropy))
    }

    pub fn from_bytes(entropy: [u8; ENTROPY_SIZE]) -> SeedBits {
        SeedBits {
            checksum: checksum_byte(&entropy),
            entropy,
        }
    }

    pub fn entropy(&self) -> &[u8; ENTROPY_SIZE] {
        &self.entropy
    }

    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The 264 bits as '0'/'1' characters, most significant first.
    pub fn to_bit_string(&self) -> String {
        self.entropy
            .iter()
            .chain(Some(&self.checksum))
            .map(|byte| format!("{:08b}", byte))
            .collect()
    }

    pub fn word_indices(&self) -> [u16; MNEMONIC_SIZE] {
        // One spare byte so the last 3-byte window stays in bounds.
        let mut seed = [0u8; ENTROPY_SIZE + 2];
        seed[..ENTROPY_SIZE].copy_from_slice(&self.entropy);
        seed[ENTROPY_SIZE] = self.checksum;

        let mut result = [0u16; MNEMONIC_SIZE];

        for (i, index) in result.iter_mut().enumerate() {
            let bit_offset = i * WORD_BITS;
            let byte_offset = bit_offset / 8;
            let shift = 24 - WORD_BITS - bit_offset % 8;

            let window = BigEndian::read_u24(&seed[byte_offset..byte_offset + 3]);
            *index = ((window >> shift) & WORD_MASK) as u16;
        }

        result
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    pub fn from_seed_bits(seed: &SeedBits, wordlist: &WordList) -> Result<Mnemonic, BIP39Error> {
        let words = seed
            .word_indices()
            .iter()
            .map(|&index| wordlist.get(index as usize).map(String::from))
            .collect::<Result<Vec<String>, BIP39Error>>()?;

        Ok(Mnemonic {
            words,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.words.iter().join(" "))
    }
}

/// Turns a roll string into its 24-word mnemonic.
///
/// Fewer rolls than needed are fine: the missing high-order digits count as zero.
pub fn dice_to_mnemonic(rolls: &str, alphabet: &DigitAlphabet, wordlist: &WordList, policy: WidthPolicy) -> Result<Mnemonic, BIP39Error> {
    let entropy = numeral::digits_to_integer(rolls, alphabet)?;
    let seed = SeedBits::from_entropy(&entropy, policy)?;

    Mnemonic::from_seed_bits(&seed, wordlist)
}
