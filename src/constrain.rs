//! Constrained-key derivation for bit-fixing patterns.
//!
//! A pattern over `{0, 1, *}` pins some input bit positions to fixed
//! values.  Deriving the constrained key copies the master matrix and, at
//! every fixed position, replaces the entry for the opposite bit value
//! with a fresh random block.  Evaluation on a matching input only ever
//! dereferences untouched entries, so it reproduces the master key's
//! output; on a mismatching input at least one leaf consumes a
//! rerandomized entry, which makes the result computationally independent
//! of the master key's.

use crate::error::CprfError;
use crate::key::SecretKey;
use crate::prf::BasePrf;

/// Validates `pattern` against `msk` and derives the constrained key.
pub(crate) fn derive<F: BasePrf + Clone>(
    msk: &SecretKey<F>,
    pattern: &str,
) -> Result<SecretKey<F>, CprfError> {
    let width = msk.width();
    let len = pattern.chars().count();
    if len > width {
        return Err(CprfError::PatternLength { len, width });
    }
    for (position, found) in pattern.chars().enumerate() {
        if !matches!(found, '0' | '1' | '*') {
            return Err(CprfError::InvalidPattern { found, position });
        }
    }

    let mut matrix = msk.matrix.clone();
    for (column, symbol) in pattern.chars().enumerate() {
        match symbol {
            // Fixing a bit to 1 kills the row-0 entry, and vice versa.
            '1' => matrix.rerandomize(0, column),
            '0' => matrix.rerandomize(1, column),
            _ => {}
        }
    }
    Ok(SecretKey {
        prf: msk.prf.clone(),
        matrix,
    })
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::error::CprfError;
    use crate::key::SecretKey;

    #[test]
    fn agrees_on_matching_value() {
        let msk = SecretKey::generate_with_width(8).unwrap();
        let value = [0xA5u8];
        let constrained = msk.constrain("10100101").unwrap();
        assert_eq!(constrained.eval(&value).unwrap(), msk.eval(&value).unwrap());
    }

    #[test]
    fn diverges_on_mismatching_value() {
        let msk = SecretKey::generate_with_width(8).unwrap();
        let value = [0xA5u8];
        // Last position forced to 0 while the value's last bit is 1.
        let constrained = msk.constrain("10100100").unwrap();
        assert_ne!(constrained.eval(&value).unwrap(), msk.eval(&value).unwrap());
    }

    #[test]
    fn wildcards_and_short_patterns_preserve_everything() {
        let msk = SecretKey::generate_with_width(16).unwrap();
        let all_stars = msk.constrain("****************").unwrap();
        let short = msk.constrain("**").unwrap();
        let empty = msk.constrain("").unwrap();
        for value in [[0x00u8, 0x00], [0xA5, 0x3C], [0xFF, 0xFF]] {
            let expected = msk.eval(&value).unwrap();
            assert_eq!(all_stars.eval(&value).unwrap(), expected);
            assert_eq!(short.eval(&value).unwrap(), expected);
            assert_eq!(empty.eval(&value).unwrap(), expected);
        }
    }

    #[test]
    fn master_key_is_never_mutated() {
        let msk = SecretKey::generate_with_width(8).unwrap();
        let value = [0x7Eu8];
        let before = msk.eval(&value).unwrap();
        let _ = msk.constrain("00000000").unwrap();
        let _ = msk.constrain("11111111").unwrap();
        assert_eq!(msk.eval(&value).unwrap(), before);
    }

    #[test]
    fn fully_fixed_pattern_pins_exactly_one_value() {
        let msk = SecretKey::generate_with_width(8).unwrap();
        let constrained = msk.constrain("10100101").unwrap();
        for byte in 0..=255u8 {
            let value = [byte];
            let master = msk.eval(&value).unwrap();
            let restricted = constrained.eval(&value).unwrap();
            if byte == 0xA5 {
                assert_eq!(restricted, master);
            } else {
                assert_ne!(restricted, master);
            }
        }
    }

    #[test]
    fn over_long_pattern_rejected() {
        let msk = SecretKey::generate_with_width(8).unwrap();
        assert_eq!(
            msk.constrain("010101010").map(|_| ()),
            Err(CprfError::PatternLength { len: 9, width: 8 })
        );
    }

    #[test]
    fn bad_alphabet_rejected() {
        let msk = SecretKey::generate_with_width(8).unwrap();
        assert_eq!(
            msk.constrain("01*2").map(|_| ()),
            Err(CprfError::InvalidPattern {
                found: '2',
                position: 3
            })
        );
        assert_eq!(
            msk.constrain("x").map(|_| ()),
            Err(CprfError::InvalidPattern {
                found: 'x',
                position: 0
            })
        );
    }

    /// Builds a 16-bit value whose fixed positions follow `pattern` and
    /// whose free positions come from `free`.
    fn value_matching(pattern: &[char], free: u16) -> [u8; 2] {
        let mut out = [0u8; 2];
        for i in 0..16 {
            let bit = match pattern.get(i) {
                Some('0') => 0u8,
                Some('1') => 1,
                _ => ((free >> i) & 1) as u8,
            };
            out[i / 8] |= bit << (7 - i % 8);
        }
        out
    }

    proptest! {
        #[test]
        fn constrain_agrees_on_every_matching_value(
            pattern in vec(prop_oneof![Just('0'), Just('1'), Just('*')], 0..=16),
            free in any::<u16>(),
        ) {
            let msk = SecretKey::generate_with_width(16).unwrap();
            let constrained = msk.constrain(&pattern.iter().collect::<String>()).unwrap();
            let value = value_matching(&pattern, free);
            prop_assert_eq!(
                constrained.eval(&value).unwrap(),
                msk.eval(&value).unwrap()
            );
        }

        #[test]
        fn eval_is_a_function_of_key_and_value(value in any::<[u8; 2]>()) {
            let key = SecretKey::generate_with_width(16).unwrap();
            prop_assert_eq!(key.eval(&value).unwrap(), key.eval(&value).unwrap());
        }
    }
}
