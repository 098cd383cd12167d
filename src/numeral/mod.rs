//! Conversion between die roll strings and unsigned integers.
//!
//! A roll string is read as a base-N numeral, most significant roll first, where N is the
//! number of faces in the [`DigitAlphabet`] and each face's value is its position in it.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use std::iter;

use crate::bip39::ENTROPY_BITS;

pub use self::alphabet::{AlphabetError, DigitAlphabet, D6_DIGITS, D8_DIGITS};

pub mod alphabet;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("'{0}' is not a digit of this alphabet")]
    InvalidDigit(char),
}

fn from_values<I>(values: I, base: usize) -> BigUint
    where
        I: Iterator<Item = usize>
{
    let base = BigUint::from(base);

    values.fold(BigUint::zero(), |acc, value| acc * &base + BigUint::from(value))
}

pub fn digits_to_integer(rolls: &str, alphabet: &DigitAlphabet) -> Result<BigUint, NumeralError> {
    let mut values = Vec::with_capacity(rolls.len());

    for c in rolls.chars() {
        match alphabet.value_of(c) {
            Some(value) => values.push(value),
            None => return Err(NumeralError::InvalidDigit(c)),
        }
    }

    Ok(from_values(values.into_iter(), alphabet.base()))
}

/// Shortest roll string for `value`. Zero has no significant digits, so it maps to "".
pub fn integer_to_digits(value: &BigUint, alphabet: &DigitAlphabet) -> String {
    let base = BigUint::from(alphabet.base());
    let mut remaining = value.clone();
    let mut result = vec![];

    while !remaining.is_zero() {
        let (quotient, remainder) = remaining.div_rem(&base);
        // remainder < base, which is a usize.
        result.push(alphabet.symbol(remainder.to_usize().unwrap_or_default()));
        remaining = quotient;
    }

    result.reverse();
    result.into_iter().collect()
}

/// Number of rolls needed to reach every value below 2^`bits`.
pub fn required_rolls_for_bits(alphabet: &DigitAlphabet, bits: usize) -> usize {
    let max = (BigUint::one() << bits) - BigUint::one();

    integer_to_digits(&max, alphabet).chars().count()
}

pub fn required_rolls(alphabet: &DigitAlphabet) -> usize {
    required_rolls_for_bits(alphabet, ENTROPY_BITS)
}

/// Bit length of the largest number `rolls` throws can spell, i.e. the highest face repeated.
///
/// This is an upper bound used as a progress hint, not a measure of the actual rolls.
pub fn max_value_bits(alphabet: &DigitAlphabet, rolls: usize) -> u64 {
    let highest = alphabet.base() - 1;

    from_values(iter::repeat(highest).take(rolls), alphabet.base()).bits()
}
