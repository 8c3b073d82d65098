//! Hue, saturation, and lightness.

use crate::Rgb;
use crate::utils::{denormalize, normalize};

/// A full turn of the hue circle, in degrees.
pub const FULL_TURN: i32 = 360;

/// A HSL color value, with integer components.
///
/// An undefined hue (`None`) converts to black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue angle in degrees, in `0..360`.
    pub hue: Option<i32>,

    /// Saturation percentage, in `0..=100`.
    pub saturation: i32,

    /// Lightness percentage, in `0..=100`.
    pub lightness: i32,
}

impl Hsl {
    /// Creates a new hsl color with a defined hue.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Hsl;
    /// let hsl = Hsl::new(120, 100, 50);
    /// assert_eq!(Some(120), hsl.hue);
    /// ```
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Hsl {
        Hsl {
            hue: Some(hue),
            saturation,
            lightness,
        }
    }

    /// Rotates the hue by `degrees`, wrapping into `0..360`.
    ///
    /// Saturation and lightness are unchanged, and an undefined hue stays undefined. Both angles
    /// are reduced before they are added, so any `i32` rotation is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Hsl;
    /// assert_eq!(Hsl::new(10, 50, 50), Hsl::new(350, 50, 50).rotate(20));
    /// assert_eq!(Hsl::new(340, 50, 50), Hsl::new(10, 50, 50).rotate(-30));
    /// ```
    pub fn rotate(self, degrees: i32) -> Hsl {
        let degrees = degrees.rem_euclid(FULL_TURN);
        Hsl {
            hue: self
                .hue
                .map(|hue| (hue.rem_euclid(FULL_TURN) + degrees) % FULL_TURN),
            ..self
        }
    }

    /// Converts this color to rgb.
    pub fn to_rgb(self) -> Rgb {
        Rgb::from(self)
    }
}

impl From<Rgb> for Hsl {
    /// Out-of-range channels are clamped before conversion.
    fn from(color: Rgb) -> Hsl {
        let Rgb { red, green, blue } = color.clamp();
        let (r, g, b) = (normalize(red), normalize(green), normalize(blue));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.;

        let (hue, saturation) = if max == min {
            (0., 0.)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2. - max - min)
            } else {
                delta / (max + min)
            };
            let sector = if max == r {
                (g - b) / delta
            } else if max == g {
                2. + (b - r) / delta
            } else {
                4. + (r - g) / delta
            };
            let mut hue = sector * 60.;
            if hue < 0. {
                hue += 360.;
            }
            (hue, saturation)
        };

        Hsl {
            hue: Some(hue.round() as i32),
            saturation: (saturation * 100.).round() as i32,
            lightness: (lightness * 100.).round() as i32,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(color: Hsl) -> Rgb {
        let Some(hue) = color.hue else {
            return Rgb::BLACK;
        };
        let saturation = f64::from(color.saturation) / 100.;
        let lightness = f64::from(color.lightness) / 100.;

        let chroma = (1. - (2. * lightness - 1.).abs()) * saturation;
        let hue_prime = f64::from(hue.rem_euclid(FULL_TURN)) / 60.;
        let second = chroma * (1. - (hue_prime % 2. - 1.).abs());

        let (red, green, blue) = match hue_prime.floor() as i32 {
            0 => (chroma, second, 0.),
            1 => (second, chroma, 0.),
            2 => (0., chroma, second),
            3 => (0., second, chroma),
            4 => (second, 0., chroma),
            _ => (chroma, 0., second),
        };
        let adjustment = lightness - chroma / 2.;

        Rgb::new(
            denormalize(red + adjustment),
            denormalize(green + adjustment),
            denormalize(blue + adjustment),
        )
    }
}
