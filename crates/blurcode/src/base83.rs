//! Base-83 string decoding.
//!
//! BlurHash packs integers into ASCII using a positional numeral system over
//! an 83-symbol alphabet. The exact symbol ordering below is part of the
//! format and must match other implementations byte for byte.

use std::sync::OnceLock;

/// The BlurHash alphabet, in digit-value order: index of a symbol in this
/// string is its base-83 digit value.
pub const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

static DIGIT_TABLE: OnceLock<[i8; 128]> = OnceLock::new();

/// ASCII-indexed reverse lookup, -1 for symbols outside the alphabet.
/// Built once on first use, read-only afterwards.
fn digit_table() -> &'static [i8; 128] {
    DIGIT_TABLE.get_or_init(|| {
        let mut table = [-1i8; 128];
        for (value, &symbol) in ALPHABET.iter().enumerate() {
            table[symbol as usize] = value as i8;
        }
        table
    })
}

/// Returns the base-83 digit value of `symbol`, or `None` if the symbol is
/// not part of the alphabet.
#[inline]
pub fn digit_value(symbol: u8) -> Option<u32> {
    if symbol < 128 {
        let value = digit_table()[symbol as usize];
        if value >= 0 {
            return Some(value as u32);
        }
    }
    None
}

/// Decodes a base-83 string into an unsigned integer, most significant
/// digit first.
///
/// Symbols outside the alphabet are silently skipped: they neither fail the
/// decode nor advance the accumulator. Reference implementations behave this
/// way, and downstream consumers may depend on it, so it is preserved here
/// rather than tightened into a validation error.
#[must_use]
pub fn decode(text: &str) -> u32 {
    decode_bytes(text.as_bytes())
}

/// Byte-slice variant of [`decode`]. The decoder works on raw bytes so that
/// codes containing multi-byte UTF-8 sequences can be sliced at arbitrary
/// offsets without panicking; such bytes fall outside the ASCII alphabet and
/// are skipped like any other unknown symbol.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> u32 {
    let mut value: u32 = 0;
    for &symbol in bytes {
        if let Some(digit) = digit_value(symbol) {
            value = value.wrapping_mul(83).wrapping_add(digit);
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits() {
        assert_eq!(decode("0"), 0);
        assert_eq!(decode("9"), 9);
        assert_eq!(decode("A"), 10);
        assert_eq!(decode("Z"), 35);
        assert_eq!(decode("a"), 36);
        assert_eq!(decode("z"), 61);
        assert_eq!(decode("#"), 62);
        assert_eq!(decode("~"), 82);
    }

    #[test]
    fn positional_accumulation() {
        assert_eq!(decode("10"), 83);
        assert_eq!(decode("13"), 83 + 3);
        assert_eq!(decode("~~"), 82 * 83 + 82);
    }

    #[test]
    fn unknown_symbols_are_skipped() {
        // '(' and '!' are not in the alphabet and must not affect the value
        assert_eq!(decode("1(3"), decode("13"));
        assert_eq!(decode("!!!"), 0);
        assert_eq!(decode(""), 0);
    }

    #[test]
    fn non_ascii_is_skipped() {
        assert_eq!(decode("1ä3"), decode("13"));
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let mut seen = [false; 128];
        for &symbol in ALPHABET.iter() {
            assert!(!seen[symbol as usize], "duplicate symbol {}", symbol as char);
            seen[symbol as usize] = true;
        }
    }
}
