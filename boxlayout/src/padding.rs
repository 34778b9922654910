//! Padding strategy for box layouts.

use crate::theme;

/// Where a layout takes its inter-child padding from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Padding {
    /// Follow the current theme; re-read on every layout call.
    #[default]
    Theme,
    /// A fixed amount, independent of the theme.
    Fixed(f32),
}

impl Padding {
    #[inline]
    pub fn resolve(self) -> f32 {
        match self {
            Padding::Theme => theme::padding(),
            Padding::Fixed(amount) => amount,
        }
    }
}

impl From<f32> for Padding {
    fn from(amount: f32) -> Self {
        Padding::Fixed(amount)
    }
}
