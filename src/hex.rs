//! Hexadecimal notation for [Rgb] colors.
//!
//! Decoding is lenient: the string is scanned for two-digit hex groups, and anything that does
//! not start a group (a leading `#`, separators, whitespace) is skipped. Encoding always produces
//! `#rrggbb` with lowercase digits.

use crate::{Error, Result, Rgb};

/// Parses the first three two-digit hex groups of `hex` as red, green, and blue.
///
/// # Examples
///
/// ```
/// use colorsolve::{hex, Rgb};
/// assert_eq!(Rgb::new(0, 169, 145), hex::decode("#00a991").unwrap());
/// assert_eq!(Rgb::new(0, 169, 145), hex::decode("00A991").unwrap());
/// assert!(hex::decode("#a991").is_err());
/// ```
pub fn decode(hex: &str) -> Result<Rgb> {
    let bytes = hex.as_bytes();
    let mut channels = [0u8; 3];
    let mut found = 0;
    let mut i = 0;
    while found < channels.len() && i + 1 < bytes.len() {
        match (nibble(bytes[i]), nibble(bytes[i + 1])) {
            (Some(high), Some(low)) => {
                channels[found] = (high << 4) | low;
                found += 1;
                i += 2;
            }
            _ => i += 1,
        }
    }
    if found < channels.len() {
        return Err(Error::InvalidHex(hex.to_string()));
    }
    Ok(Rgb::from(channels))
}

/// Renders `color` as `#rrggbb`.
///
/// Channels outside of `0..=255` are clamped before rendering.
///
/// # Examples
///
/// ```
/// use colorsolve::{hex, Rgb};
/// assert_eq!("#00625a", hex::encode(Rgb::new(0, 98, 90)));
/// ```
pub fn encode(color: Rgb) -> String {
    let Rgb { red, green, blue } = color.clamp();
    format!("#{:02x}{:02x}{:02x}", red, green, blue)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_constants() {
        assert_eq!(Rgb::new(0, 169, 145), decode("#00a991").unwrap());
        assert_eq!(Rgb::new(107, 105, 119), decode("#6b6977").unwrap());
        assert_eq!(Rgb::new(105, 46, 99), decode("#692e63").unwrap());
        assert_eq!(Rgb::new(111, 109, 0), decode("#6f6d00").unwrap());
    }

    #[test]
    fn decode_skips_separators() {
        assert_eq!(Rgb::new(107, 105, 119), decode(" 6b-69:77").unwrap());
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef), decode("#x#abcdef").unwrap());
    }

    #[test]
    fn decode_mixed_case_nibbles() {
        assert_eq!(Rgb::new(0xf0, 0x0f, 0xaf), decode("F00fAf").unwrap());
    }

    #[test]
    fn decode_ignores_trailing_groups() {
        assert_eq!(Rgb::new(1, 2, 3), decode("#01020304").unwrap());
    }

    #[test]
    fn decode_too_short() {
        assert!(matches!(decode("#12345"), Err(Error::InvalidHex(_))));
        assert!(matches!(decode("#1-2-3-4-5-6"), Err(Error::InvalidHex(_))));
        assert!(matches!(decode(""), Err(Error::InvalidHex(_))));
        assert!(matches!(decode("zzzzzz"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn encode_pads_and_lowercases() {
        assert_eq!("#000000", encode(Rgb::BLACK));
        assert_eq!("#0a0b0c", encode(Rgb::new(10, 11, 12)));
        assert_eq!("#ffffff", encode(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn encode_clamps() {
        assert_eq!("#00ff0a", encode(Rgb::new(-5, 300, 10)));
    }

    #[test]
    fn roundtrip() {
        for color in [
            Rgb::BLACK,
            Rgb::new(255, 255, 255),
            Rgb::new(0, 98, 90),
            Rgb::new(1, 128, 254),
        ] {
            assert_eq!(color, decode(&encode(color)).unwrap());
        }
    }
}
