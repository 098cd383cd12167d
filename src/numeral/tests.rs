use crate::numeral::*;
use num_bigint::BigUint;
use num_traits::{One, Zero};

fn d6() -> DigitAlphabet {
    DigitAlphabet::new(D6_DIGITS).unwrap()
}

#[test]
fn digits_are_most_significant_first() {
    let alphabet = d6();

    assert_eq!(digits_to_integer("", &alphabet).unwrap(), BigUint::zero());
    assert_eq!(digits_to_integer("1", &alphabet).unwrap(), BigUint::zero());
    assert_eq!(digits_to_integer("6", &alphabet).unwrap(), BigUint::from(5u32));
    assert_eq!(digits_to_integer("21", &alphabet).unwrap(), BigUint::from(6u32));
    assert_eq!(digits_to_integer("12", &alphabet).unwrap(), BigUint::from(1u32));
    assert_eq!(digits_to_integer("666", &alphabet).unwrap(), BigUint::from(215u32));
}

#[test]
fn leading_zero_digits_do_not_change_value() {
    let alphabet = d6();
    let padded = format!("{}{}", "1".repeat(100), "3");

    assert_eq!(digits_to_integer(&padded, &alphabet).unwrap(), BigUint::from(2u32));
}

#[test]
fn unknown_digit_is_rejected() {
    let alphabet = d6();

    assert_eq!(digits_to_integer("1237", &alphabet), Err(NumeralError::InvalidDigit('7')));
    assert_eq!(digits_to_integer("0", &alphabet), Err(NumeralError::InvalidDigit('0')));
}

#[test]
fn integer_to_digits_is_minimal() {
    let alphabet = d6();

    assert_eq!(integer_to_digits(&BigUint::zero(), &alphabet), "");
    assert_eq!(integer_to_digits(&BigUint::from(5u32), &alphabet), "6");
    assert_eq!(integer_to_digits(&BigUint::from(6u32), &alphabet), "21");
    assert_eq!(integer_to_digits(&BigUint::from(215u32), &alphabet), "666");
}

#[test]
fn conversion_round_trips_through_d8() {
    let alphabet = DigitAlphabet::new(D8_DIGITS).unwrap();
    let rolls = "81726354";
    let value = digits_to_integer(rolls, &alphabet).unwrap();

    assert_eq!(integer_to_digits(&value, &alphabet), rolls);
}

#[test]
fn required_rolls_for_presets() {
    // 6^99 < 2^256 <= 6^100 and 8^85 < 2^256 <= 8^86.
    assert_eq!(required_rolls(&d6()), 100);
    assert_eq!(required_rolls(&DigitAlphabet::new(D8_DIGITS).unwrap()), 86);

    let binary = DigitAlphabet::new("01").unwrap();
    assert_eq!(required_rolls(&binary), 256);
}

#[test]
fn required_rolls_cover_entropy_range() {
    for digits in &["01", "123", "123456", "12345678", "0123456789abcdef", "abcdefghijklmnopqrst"] {
        let alphabet = DigitAlphabet::new(digits).unwrap();
        let base = BigUint::from(alphabet.base());
        let rolls = required_rolls(&alphabet) as u32;
        let max_entropy = (BigUint::one() << 256usize) - BigUint::one();

        assert!(base.pow(rolls) - BigUint::one() >= max_entropy, "{} too few rolls", digits);
        assert!(base.pow(rolls - 1) - BigUint::one() < max_entropy, "{} too many rolls", digits);
    }
}

#[test]
fn max_value_bits_bounds_entropy() {
    let alphabet = d6();

    assert_eq!(max_value_bits(&alphabet, 0), 0);
    // 6 - 1 = 5 = 0b101
    assert_eq!(max_value_bits(&alphabet, 1), 3);
    // 36 - 1 = 35 = 0b100011
    assert_eq!(max_value_bits(&alphabet, 2), 6);
    // 6^100 - 1 spans 259 bits.
    assert_eq!(max_value_bits(&alphabet, 100), 259);

    let spelled = digits_to_integer(&"6".repeat(40), &alphabet).unwrap();
    assert_eq!(max_value_bits(&alphabet, 40), spelled.bits());
}

#[test]
fn alphabet_rejects_duplicates() {
    assert_eq!(DigitAlphabet::new("112345"), Err(AlphabetError::DuplicateAlphabetDigit('1')));
    assert_eq!(DigitAlphabet::new("123455"), Err(AlphabetError::DuplicateAlphabetDigit('5')));
}

#[test]
fn alphabet_rejects_single_digit() {
    assert_eq!(DigitAlphabet::new("1"), Err(AlphabetError::AlphabetTooSmall(1)));
    assert_eq!(DigitAlphabet::new(""), Err(AlphabetError::AlphabetTooSmall(0)));
}

#[test]
fn presets() {
    assert_eq!(DigitAlphabet::preset(6), Some(d6()));
    assert_eq!(DigitAlphabet::preset(8).unwrap().to_string(), D8_DIGITS);
    assert_eq!(DigitAlphabet::preset(20), None);
}
