use crate::utils::clamp_channel;
use crate::{BlendMode, Error, Hsl};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A RGB color value.
///
/// Channels are signed so that intermediate arithmetic (e.g. subtraction) can leave the
/// `0..=255` range. Blending and hex encoding clamp them back first. Addition and subtraction
/// saturate at the bounds of `i32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: i32,

    /// Green channel.
    pub green: i32,

    /// Blue channel.
    pub blue: i32,
}

impl Rgb {
    /// Black, the zero color.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Rgb;
    /// let color = Rgb::new(1, 2, 3);
    /// assert_eq!(1, color.red);
    /// assert_eq!(2, color.green);
    /// assert_eq!(3, color.blue);
    /// ```
    pub const fn new(red: i32, green: i32, blue: i32) -> Rgb {
        Rgb { red, green, blue }
    }

    /// Clamps every channel into `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Rgb;
    /// assert_eq!(Rgb::new(0, 255, 10), Rgb::new(-5, 300, 10).clamp());
    /// ```
    pub fn clamp(self) -> Rgb {
        self.map(clamp_channel)
    }

    /// Blends `source` over this color with the screen operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Rgb;
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(white, Rgb::new(10, 20, 30).screen(white));
    /// ```
    pub fn screen(self, source: Rgb) -> Rgb {
        crate::blend(self, source, BlendMode::Screen)
    }

    /// Blends `source` over this color with the multiply operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Rgb;
    /// assert_eq!(Rgb::BLACK, Rgb::new(10, 20, 30).multiply(Rgb::BLACK));
    /// ```
    pub fn multiply(self, source: Rgb) -> Rgb {
        crate::blend(self, source, BlendMode::Multiply)
    }

    /// Subtracts `other` channel by channel, without clamping to `0..=255`.
    ///
    /// Channels saturate at the bounds of `i32` instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Rgb;
    /// let a = Rgb::new(0, 169, 145);
    /// let b = Rgb::new(0, 71, 55);
    /// assert_eq!(Rgb::new(0, 98, 90), a.subtract(b));
    /// assert_eq!(Rgb::new(0, -98, -90), b.subtract(a));
    /// ```
    pub fn subtract(self, other: Rgb) -> Rgb {
        Rgb::new(
            self.red.saturating_sub(other.red),
            self.green.saturating_sub(other.green),
            self.blue.saturating_sub(other.blue),
        )
    }

    /// Converts to hsl, rotates the hue by `degrees`, and converts back.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Rgb;
    /// assert_eq!(Rgb::new(0, 255, 0), Rgb::new(255, 0, 0).rotate_hue(120));
    /// ```
    pub fn rotate_hue(self, degrees: i32) -> Rgb {
        self.to_hsl().rotate(degrees).to_rgb()
    }

    /// Converts this color to hsl.
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }

    /// Renders this color as `#rrggbb`, clamping out-of-range channels first.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Rgb;
    /// assert_eq!("#00625a", Rgb::new(0, 98, 90).to_hex());
    /// assert_eq!("#00ff0a", Rgb::new(-5, 300, 10).to_hex());
    /// ```
    pub fn to_hex(self) -> String {
        crate::hex::encode(self)
    }

    fn map<F: Fn(i32) -> i32>(self, f: F) -> Rgb {
        Rgb::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl Add for Rgb {
    type Output = Rgb;

    fn add(self, other: Rgb) -> Rgb {
        Rgb::new(
            self.red.saturating_add(other.red),
            self.green.saturating_add(other.green),
            self.blue.saturating_add(other.blue),
        )
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    fn sub(self, other: Rgb) -> Rgb {
        self.subtract(other)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Rgb {
        Rgb::new(red.into(), green.into(), blue.into())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Rgb, Error> {
        crate::hex::decode(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
