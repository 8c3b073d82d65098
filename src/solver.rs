//! Solves `target = rotate(multiply(screen(e, m), o)) + x` for `x`.
//!
//! Every input of the blend-and-rotate chain is known, so the whole chain evaluates to a constant
//! offset `f`, and the equation reduces to `x = target - f`, channel by channel.

use crate::Rgb;
use log::{Level, log};

/// The hue rotation used when none is given.
pub const DEFAULT_ROTATION: i32 = 120;

/// Evaluates the blend chain and subtracts it from a target.
///
/// # Examples
///
/// ```
/// use colorsolve::{Rgb, Solver};
/// let solver = Solver::default();
/// let x = solver.solve(
///     "#00a991".parse().unwrap(),
///     "#6b6977".parse().unwrap(),
///     "#692e63".parse().unwrap(),
///     "#6f6d00".parse().unwrap(),
/// );
/// assert_eq!("#00625a", x.to_hex());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solver {
    /// Degrees the blended color's hue is rotated by.
    pub rotation: i32,
}

/// The two halves of a solved equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The constant term, `rotate(multiply(screen(e, m), o))`.
    pub offset: Rgb,

    /// The recovered color, `target - offset`.
    pub unknown: Rgb,
}

impl Solver {
    /// Creates a solver that rotates hue by `rotation` degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::Solver;
    /// assert_eq!(Solver::new(120), Solver::default());
    /// ```
    pub fn new(rotation: i32) -> Solver {
        Solver { rotation }
    }

    /// Evaluates the constant term of the equation.
    pub fn offset(&self, e: Rgb, m: Rgb, o: Rgb) -> Rgb {
        let screened = e.screen(m);
        log!(Level::Debug, "screen({}, {}) = {}", e, m, screened);
        let multiplied = screened.multiply(o);
        log!(Level::Debug, "multiply({}, {}) = {}", screened, o, multiplied);
        let rotated = multiplied.rotate_hue(self.rotation);
        log!(
            Level::Debug,
            "rotate({}, {}) = {}",
            multiplied,
            self.rotation,
            rotated
        );
        rotated
    }

    /// Solves for the unknown color.
    ///
    /// The result is not clamped, so channels may fall outside of `0..=255`.
    pub fn solve(&self, target: Rgb, e: Rgb, m: Rgb, o: Rgb) -> Rgb {
        self.solution(target, e, m, o).unknown
    }

    /// Solves for the unknown color, keeping the constant term alongside it.
    pub fn solution(&self, target: Rgb, e: Rgb, m: Rgb, o: Rgb) -> Solution {
        let offset = self.offset(e, m, o);
        let unknown = target.subtract(offset);
        log!(Level::Debug, "{} - {} = {:?}", target, offset, unknown);
        Solution { offset, unknown }
    }

    /// Returns true if `candidate` satisfies the equation for these inputs.
    ///
    /// The constant term is evaluated again from `e`, `m`, and `o`, so a candidate solved with
    /// a different rotation or different inputs is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorsolve::{Rgb, Solver};
    /// let target = Rgb::new(0, 169, 145);
    /// let e = Rgb::new(107, 105, 119);
    /// let m = Rgb::new(105, 46, 99);
    /// let o = Rgb::new(111, 109, 0);
    /// let solver = Solver::default();
    /// assert!(solver.check(Rgb::new(0, 98, 90), target, e, m, o));
    /// assert!(!solver.check(Rgb::BLACK, target, e, m, o));
    /// ```
    pub fn check(&self, candidate: Rgb, target: Rgb, e: Rgb, m: Rgb, o: Rgb) -> bool {
        self.offset(e, m, o) + candidate == target
    }
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::new(DEFAULT_ROTATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> (Rgb, Rgb, Rgb, Rgb) {
        (
            Rgb::new(0, 169, 145),
            Rgb::new(107, 105, 119),
            Rgb::new(105, 46, 99),
            Rgb::new(111, 109, 0),
        )
    }

    #[test]
    fn offset() {
        let (_, e, m, o) = inputs();
        assert_eq!(Rgb::new(0, 71, 55), Solver::default().offset(e, m, o));
    }

    #[test]
    fn solve() {
        let (k, e, m, o) = inputs();
        assert_eq!(Rgb::new(0, 98, 90), Solver::default().solve(k, e, m, o));
    }

    #[test]
    fn check_recomputes_offset() {
        let (k, e, m, o) = inputs();
        let solver = Solver::default();
        let x = solver.solve(k, e, m, o);
        assert!(solver.check(x, k, e, m, o));
        assert!(!solver.check(x, k, m, e, Rgb::BLACK));
        assert!(!solver.check(Rgb::BLACK, k, e, m, o));

        let unrotated = Solver::new(0).solve(k, e, m, o);
        assert!(!solver.check(unrotated, k, e, m, o));
        assert!(Solver::new(0).check(unrotated, k, e, m, o));
    }

    #[test]
    fn zero_rotation() {
        let (k, e, m, o) = inputs();
        let solution = Solver::new(0).solution(k, e, m, o);
        // hsl rounding drifts the blended color even without rotation
        assert_eq!(Rgb::new(71, 55, 0), solution.offset);
        assert_eq!(Rgb::new(-71, 114, 145), solution.unknown);
    }

    #[test]
    fn extreme_rotation() {
        let (k, e, m, o) = inputs();
        // i32::MAX is 127 mod 360
        assert_eq!(
            Solver::new(127).solve(k, e, m, o),
            Solver::new(i32::MAX).solve(k, e, m, o)
        );
        assert_eq!(
            Solver::new(232).solve(k, e, m, o),
            Solver::new(i32::MIN).solve(k, e, m, o)
        );
    }

    #[test]
    fn full_turn_matches_zero_rotation() {
        let (k, e, m, o) = inputs();
        assert_eq!(
            Solver::new(360).solve(k, e, m, o),
            Solver::new(0).solve(k, e, m, o)
        );
    }
}
