//! Random colors.
//!
//! There is no process-wide generator. Callers own a [`RandomSource`] and pass
//! it in, which keeps draws reproducible (seed it) and thread-safe (don't
//! share it). Every [`rand::Rng`] is a `RandomSource`.
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use styled_terminal::Color;
//!
//! let mut a = StdRng::seed_from_u64(7);
//! let mut b = StdRng::seed_from_u64(7);
//! assert_eq!(
//!     Color::random_bright(&mut a).unwrap(),
//!     Color::random_bright(&mut b).unwrap(),
//! );
//! ```

use crate::error::{Result, StyleError};

use super::Color;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `min..=max`.
    ///
    /// Fails with [`StyleError::InvalidParameter`] when `min > max`.
    fn next_in_range(&mut self, min: u32, max: u32) -> Result<u32>;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_in_range(&mut self, min: u32, max: u32) -> Result<u32> {
        if min > max {
            return Err(StyleError::invalid(
                "min",
                "a number less than or equal to max",
            ));
        }
        Ok(self.random_range(min..=max))
    }
}

impl Color {
    /// A uniformly random true color.
    pub fn random<S: RandomSource>(source: &mut S) -> Result<Self> {
        let red = source.next_in_range(0, 255)?;
        let green = source.next_in_range(0, 255)?;
        let blue = source.next_in_range(0, 255)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(red, green, blue, "drew random color");

        Self::from_rgb(red.into(), green.into(), blue.into())
    }

    /// A random fully saturated color with lightness in 50–85%.
    pub fn random_bright<S: RandomSource>(source: &mut S) -> Result<Self> {
        Self::random_hsl(source, 100.0, (50, 85))
    }

    /// A random half saturated color with lightness in 15–50%.
    pub fn random_dim<S: RandomSource>(source: &mut S) -> Result<Self> {
        Self::random_hsl(source, 50.0, (15, 50))
    }

    fn random_hsl<S: RandomSource>(
        source: &mut S,
        saturation: f64,
        (min_light, max_light): (u32, u32),
    ) -> Result<Self> {
        let hue = source.next_in_range(0, 360)?;
        let lightness = source.next_in_range(min_light, max_light)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(hue, saturation, lightness, "drew random hsl color");

        Self::from_hsl(hue.into(), saturation, lightness.into())
    }
}
