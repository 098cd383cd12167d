use std::io;

use crate::bip39::{self, BIP39Error, Mnemonic, WidthPolicy, WordList};
use crate::numeral::{self, DigitAlphabet};

pub use self::display::{DisplaySurface, Key};

pub mod display;


const PROMPT_ROW: u16 = 0;
const ROLLS_ROW: u16 = 1;
const ENTROPY_ROW: u16 = 3;
const WORDS_ROW: u16 = 5;

// Live rolls can spell more than 256 bits, so the session keeps the low-order bits.
const SESSION_WIDTH_POLICY: WidthPolicy = WidthPolicy::Truncate;

#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error(transparent)]
    Codec(#[from] BIP39Error),
    #[error("display error")]
    Display(#[from] io::Error),
    #[error("aborted before all rolls were entered")]
    Aborted,
    #[error("only {have} of {required} rolls entered")]
    Incomplete { have: usize, required: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Collecting,
    Complete,
}

/// What gets redrawn after every roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub rolls: String,
    pub required: usize,
    /// Upper bound from the roll count alone, not from the rolls themselves.
    pub estimated_entropy_bits: u64,
    pub preview: Mnemonic,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionResult {
    pub rolls: String,
    pub mnemonic: Mnemonic,
}

impl SessionResult {
    pub fn render(&self, show_rolls: bool) -> String {
        if show_rolls {
            format!("{}\n{}", self.rolls, self.mnemonic)
        } else {
            self.mnemonic.to_string()
        }
    }
}

/// One pass of dice collection. The roll string only grows, and stops at `required`.
pub struct CollectionSession<'a> {
    alphabet: DigitAlphabet,
    wordlist: &'a WordList,
    required: usize,
    rolls: String,
}

impl<'a> CollectionSession<'a> {
    pub fn new(alphabet: DigitAlphabet, wordlist: &'a WordList) -> CollectionSession<'a> {
        let required = numeral::required_rolls(&alphabet);
        debug!("Base {} needs {} rolls", alphabet.base(), required);

        CollectionSession {
            alphabet,
            wordlist,
            required,
            rolls: String::with_capacity(required),
        }
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn rolls(&self) -> &str {
        &self.rolls
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.chars().count()
    }

    pub fn state(&self) -> SessionState {
        if self.roll_count() < self.required {
            SessionState::Collecting
        } else {
            SessionState::Complete
        }
    }

    /// Records `symbol` if it's a face of the die. Returns whether it was taken.
    pub fn push(&mut self, symbol: char) -> bool {
        if self.state() == SessionState::Complete || !self.alphabet.contains(symbol) {
            return false;
        }

        self.rolls.push(symbol);
        true
    }

    pub fn snapshot(&self) -> Result<Snapshot, BIP39Error> {
        let preview = bip39::dice_to_mnemonic(&self.rolls, &self.alphabet, self.wordlist, SESSION_WIDTH_POLICY)?;

        Ok(Snapshot {
            rolls: self.rolls.clone(),
            required: self.required,
            estimated_entropy_bits: numeral::max_value_bits(&self.alphabet, self.roll_count()),
            preview,
        })
    }

    pub fn finish(self) -> Result<SessionResult, CollectorError> {
        if self.state() == SessionState::Collecting {
            return Err(CollectorError::Incomplete {
                have: self.roll_count(),
                required: self.required,
            });
        }

        let mnemonic = bip39::dice_to_mnemonic(&self.rolls, &self.alphabet, self.wordlist, SESSION_WIDTH_POLICY)?;

        Ok(SessionResult {
            rolls: self.rolls,
            mnemonic,
        })
    }
}

fn draw<S: DisplaySurface>(surface: &mut S, snapshot: &Snapshot) -> io::Result<()> {
    surface.clear()?;

    let prompt = format!("Entering {}/{} dice roll: ", snapshot.rolls.chars().count() + 1, snapshot.required);
    surface.write_at(PROMPT_ROW, 0, &prompt)?;

    surface.write_at(ROLLS_ROW, 0, &format!("-> {}", snapshot.rolls))?;
    surface.write_at(ENTROPY_ROW, 0, &format!("estimated entropy <{}-bits", snapshot.estimated_entropy_bits))?;

    for (row, word) in (WORDS_ROW..).zip(snapshot.preview.words()) {
        surface.write_at(row, 0, word)?;
    }

    // Park the cursor after the prompt, where the next roll would be typed. Computed rather
    // than read back, since asking the terminal goes through stdout.
    surface.move_to(PROMPT_ROW, prompt.chars().count() as u16)?;
    surface.refresh()
}

/// Runs the interactive loop on `surface` until every roll is in.
///
/// The caller owns the surface and is responsible for releasing it, whatever this returns.
/// Nothing is logged in here: the surface may be holding stderr, where the logger writes.
pub fn run_prompt<S: DisplaySurface>(surface: &mut S, mut session: CollectionSession) -> Result<SessionResult, CollectorError> {
    while session.state() == SessionState::Collecting {
        let snapshot = session.snapshot()?;
        draw(surface, &snapshot)?;

        match surface.read_key()? {
            Key::Char(c) => {
                session.push(c);
            },
            Key::Abort => return Err(CollectorError::Aborted),
            Key::Other => (),
        }
    }

    session.finish()
}
