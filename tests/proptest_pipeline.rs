use proptest::prelude::*;

use dice_seed::bip39::{self, SeedBits, WidthPolicy, WordList, ENTROPY_SIZE, MNEMONIC_SIZE};
use dice_seed::numeral::{self, DigitAlphabet, D6_DIGITS, D8_DIGITS};
use num_bigint::BigUint;

fn wordlist() -> WordList {
    WordList::from_words((0..2048).map(|i| format!("w{:04}", i)))
}

fn alphabet() -> impl Strategy<Value = DigitAlphabet> {
    prop_oneof![
        Just(D6_DIGITS.to_string()),
        Just(D8_DIGITS.to_string()),
        Just("01".to_string()),
        Just("0123456789".to_string()),
        prop::collection::btree_set(prop::char::range('a', 'z'), 2..26)
            .prop_map(|set| set.into_iter().collect::<String>()),
    ]
    .prop_map(|digits| DigitAlphabet::new(&digits).unwrap())
}

fn alphabet_and_rolls() -> impl Strategy<Value = (DigitAlphabet, String)> {
    alphabet().prop_flat_map(|alphabet| {
        let base = alphabet.base();
        let rolls = prop::collection::vec(0..base, 0..120);

        (Just(alphabet.clone()), rolls.prop_map(move |values| {
            values.into_iter().map(|v| alphabet.symbol(v)).collect::<String>()
        }))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn rolls_round_trip_without_leading_zeros((alphabet, rolls) in alphabet_and_rolls()) {
        let value = numeral::digits_to_integer(&rolls, &alphabet).unwrap();
        let zero = alphabet.symbol(0);

        prop_assert_eq!(numeral::integer_to_digits(&value, &alphabet), rolls.trim_start_matches(zero));
    }

    #[test]
    fn mnemonic_has_24_words_for_any_rolls((alphabet, rolls) in alphabet_and_rolls()) {
        let mnemonic = bip39::dice_to_mnemonic(&rolls, &alphabet, &wordlist(), WidthPolicy::Truncate).unwrap();

        prop_assert_eq!(mnemonic.words().len(), MNEMONIC_SIZE);
    }

    #[test]
    fn mnemonic_is_deterministic(entropy in prop::array::uniform32(any::<u8>()), alphabet in alphabet()) {
        let value = BigUint::from_bytes_be(&entropy);
        let rolls = numeral::integer_to_digits(&value, &alphabet);
        let wordlist = wordlist();

        let first = bip39::dice_to_mnemonic(&rolls, &alphabet, &wordlist, WidthPolicy::Reject).unwrap();
        let second = bip39::dice_to_mnemonic(&rolls, &alphabet, &wordlist, WidthPolicy::Reject).unwrap();
        prop_assert_eq!(&first, &second);

        // Values below 2^256 survive the trip through the alphabet untouched.
        let seed = SeedBits::from_entropy(&value, WidthPolicy::Reject).unwrap();
        prop_assert_eq!(&seed.entropy()[..], &entropy[..]);
    }

    #[test]
    fn seed_bits_are_264_long(entropy in prop::array::uniform32(any::<u8>())) {
        let seed = SeedBits::from_bytes(entropy);
        let bits = seed.to_bit_string();

        prop_assert_eq!(bits.len(), 264);
        prop_assert_eq!(&bits[256..], format!("{:08b}", seed.checksum()));

        // Indices are just the bit string cut into 11s.
        for (i, index) in seed.word_indices().iter().enumerate() {
            let group = &bits[i * 11..(i + 1) * 11];
            prop_assert_eq!(u16::from_str_radix(group, 2).unwrap(), *index);
        }
    }

    #[test]
    fn single_bit_flip_changes_seed(entropy in prop::array::uniform32(any::<u8>()), bit in 0..(ENTROPY_SIZE * 8)) {
        let mut flipped = entropy;
        flipped[bit / 8] ^= 0x80 >> (bit % 8);

        let before = SeedBits::from_bytes(entropy);
        let changed = SeedBits::from_bytes(flipped);

        prop_assert_ne!(before.word_indices(), changed.word_indices());
    }
}
