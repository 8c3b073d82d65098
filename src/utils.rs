//! Channel helpers shared by the conversions and blend modes.

/// The largest value a color channel may hold.
pub const CHANNEL_MAX: i32 = 255;

/// Restricts `value` to the inclusive range `low..=high`.
///
/// # Examples
///
/// ```
/// use colorsolve::utils::clamp;
/// assert_eq!(0, clamp(-5, 0, 255));
/// assert_eq!(255, clamp(300, 0, 255));
/// assert_eq!(10, clamp(10, 0, 255));
/// ```
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    num_traits::clamp(value, low, high)
}

/// Clamps a channel into `0..=255`.
pub(crate) fn clamp_channel(channel: i32) -> i32 {
    clamp(channel, 0, CHANNEL_MAX)
}

/// Maps a `0..=255` channel onto `0.0..=1.0`.
pub(crate) fn normalize(channel: i32) -> f64 {
    f64::from(channel) / f64::from(CHANNEL_MAX)
}

/// Maps a `0.0..=1.0` value back onto a rounded channel.
pub(crate) fn denormalize(value: f64) -> i32 {
    (value * f64::from(CHANNEL_MAX)).round() as i32
}
