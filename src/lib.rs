//! Recover an unknown color from a chain of blend and hue-rotation operations.
//!
//! Given a target color `K` and three known colors `E`, `M`, and `O`, solve
//!
//! ```text
//! K = rotate(multiply(screen(E, M), O)) + X
//! ```
//!
//! for `X`, where `rotate` turns the hue by 120 degrees.
//!
//! # Colors
//!
//! Parse an [Rgb] from hex notation:
//!
//! ```
//! use colorsolve::Rgb;
//! let kiwi: Rgb = "#00a991".parse().unwrap();
//! assert_eq!(Rgb::new(0, 169, 145), kiwi);
//! ```
//!
//! Convert to and from [Hsl], and rotate the hue:
//!
//! ```
//! use colorsolve::{Hsl, Rgb};
//! let red = Rgb::new(255, 0, 0);
//! assert_eq!(Hsl::new(0, 100, 50), red.to_hsl());
//! assert_eq!(Rgb::new(0, 0, 255), red.rotate_hue(240));
//! ```
//!
//! # Blending
//!
//! ```
//! use colorsolve::{blend, BlendMode, Rgb};
//! let gray = Rgb::new(128, 128, 128);
//! let white = Rgb::new(255, 255, 255);
//! assert_eq!(white, blend(gray, white, BlendMode::Screen));
//! assert_eq!(gray, gray.multiply(white));
//! ```
//!
//! # Solving
//!
//! ```
//! use colorsolve::{palette, Rgb, Solver};
//! let colors = palette::from_bytes(palette::KIWI).unwrap();
//! let x = Solver::default().solve("#00a991".parse().unwrap(), colors[0], colors[1], colors[2]);
//! assert_eq!("#00625a", x.to_hex());
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    unsafe_code,
    unused_import_braces
)]

pub mod hex;
pub mod palette;
pub mod solver;
pub mod utils;

mod blend;
mod color;
mod error;
mod hsl;

pub use blend::{BlendMode, blend};
pub use color::Rgb;
pub use error::Error;
pub use hsl::Hsl;
pub use solver::{Solution, Solver};

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
