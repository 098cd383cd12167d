use std::fs;
use std::path::Path;

use crate::bip39::{BIP39Error, WORDLIST_SIZE};

/// Words addressed by 11-bit indices. Loaded once and never changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> WordList
        where
            I: IntoIterator<Item = S>,
            S: Into<String>
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        // Short lists are still usable as long as no index lands past the end.
        if words.len() != WORDLIST_SIZE {
            warn!("Word list has {} words instead of {}", words.len(), WORDLIST_SIZE);
        }

        WordList {
            words,
        }
    }

    /// Reads one word per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<WordList, BIP39Error> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| BIP39Error::WordListFileMissing {
            path: path.to_path_buf(),
            source,
        })?;

        let wordlist = WordList::from_words(contents.lines());
        debug!("Loaded {} words from {}", wordlist.len(), path.display());

        Ok(wordlist)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&str, BIP39Error> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(BIP39Error::WordListTooShort {
                index,
                len: self.words.len(),
            })
    }
}
