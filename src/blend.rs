//! Separable blend modes.

use crate::utils::{denormalize, normalize};
use crate::{Error, Rgb};
use log::{Level, log};
use std::fmt;
use std::str::FromStr;

/// A blend mode, applied channel by channel on normalized values.
///
/// Both modes are commutative, so backdrop and source may be swapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// `b + s - b * s`, which never darkens.
    Screen,
    /// `b * s`, which never lightens.
    Multiply,
}

impl BlendMode {
    /// Applies this mode to a pair of channels in `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::BlendMode;
    /// assert_eq!(0.75, BlendMode::Screen.apply(0.5, 0.5));
    /// assert_eq!(0.25, BlendMode::Multiply.apply(0.5, 0.5));
    /// ```
    pub fn apply(self, backdrop: f64, source: f64) -> f64 {
        match self {
            BlendMode::Screen => backdrop + source - backdrop * source,
            BlendMode::Multiply => backdrop * source,
        }
    }

    /// The name this mode parses from.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Screen => "screen",
            BlendMode::Multiply => "multiply",
        }
    }
}

impl FromStr for BlendMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<BlendMode, Error> {
        match s {
            "screen" => Ok(BlendMode::Screen),
            "multiply" => Ok(BlendMode::Multiply),
            _ => Err(Error::UnknownBlendMode(s.to_string())),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Blends `source` over `backdrop`.
///
/// Both colors are clamped into `0..=255` first, and the result is rounded to the nearest
/// channel value.
///
/// # Examples
///
/// ```
/// use colorsolve::{blend, BlendMode, Rgb};
/// let ebony = Rgb::new(107, 105, 119);
/// let magenta = Rgb::new(105, 46, 99);
/// assert_eq!(Rgb::new(168, 132, 172), blend(ebony, magenta, BlendMode::Screen));
/// ```
pub fn blend(backdrop: Rgb, source: Rgb, mode: BlendMode) -> Rgb {
    let backdrop = backdrop.clamp();
    let source = source.clamp();
    let channel = |b: i32, s: i32| denormalize(mode.apply(normalize(b), normalize(s)));
    let blended = Rgb::new(
        channel(backdrop.red, source.red),
        channel(backdrop.green, source.green),
        channel(backdrop.blue, source.blue),
    );
    log!(Level::Trace, "{}({}, {}) = {}", mode, backdrop, source, blended);
    blended
}
