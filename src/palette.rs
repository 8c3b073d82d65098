//! Colors hidden in byte strings.
//!
//! Any byte sequence whose length is a multiple of three can be read as a run of rgb colors,
//! one byte per channel.
//!
//! ```
//! use colorsolve::{palette, Rgb};
//! let colors = palette::from_bytes(palette::KIWI).unwrap();
//! assert_eq!(vec![
//!     "#6b6977".parse::<Rgb>().unwrap(),
//!     "#692e63".parse::<Rgb>().unwrap(),
//!     "#6f6d00".parse::<Rgb>().unwrap(),
//! ], colors);
//! ```

use crate::{Error, Result, Rgb};

/// The nul-terminated string the three named colors are read from.
pub const KIWI: &[u8] = b"kiwi.com\0";

/// Splits `bytes` into consecutive rgb triplets.
///
/// Returns an error if `bytes` is empty or its length is not a multiple of three.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Rgb>> {
    if bytes.is_empty() || bytes.len() % 3 != 0 {
        return Err(Error::IncompleteTriplet(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(3)
        .map(|chunk| Rgb::new(chunk[0].into(), chunk[1].into(), chunk[2].into()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kiwi() {
        let colors = from_bytes(KIWI).unwrap();
        assert_eq!(
            vec![
                Rgb::new(107, 105, 119),
                Rgb::new(105, 46, 99),
                Rgb::new(111, 109, 0),
            ],
            colors
        );
    }

    #[test]
    fn incomplete() {
        assert!(matches!(
            from_bytes(b"kiwi.com"),
            Err(Error::IncompleteTriplet(8))
        ));
        assert!(matches!(from_bytes(b""), Err(Error::IncompleteTriplet(0))));
    }
}
