//! Simulation time model.
//!
//! Time advances in discrete frames: the external driver calls the world's
//! step function once per rendered frame at a fixed rate.  All spawn timing
//! is expressed in frames, so arithmetic stays exact.

use std::fmt;

/// An absolute frame counter, starting at zero when the game is started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0 - earlier.0
    }

    /// The frame after this one.
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl std::ops::Sub for Frame {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Frame) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
