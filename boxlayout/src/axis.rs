//! Axis selection for the box layout.
//!
//! Vertical and horizontal boxes are mirror images of each other. Rather than
//! keeping two copies of the algorithm, every read and write of a size or
//! position goes through an [`Axis`], which maps the main/cross components onto
//! width/height (or x/y).

use serde::{Deserialize, Serialize};

use crate::primitives::{Position, Size};

/// The axis children are stacked along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Children flow left to right (a row).
    Horizontal,
    /// Children flow top to bottom (a column).
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross_axis(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Main-axis component of a size.
    #[inline]
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Cross-axis component of a size.
    #[inline]
    pub fn cross(self, size: Size) -> f32 {
        self.cross_axis().main(size)
    }

    /// Build a size from its main and cross components.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Move a position forward along this axis.
    #[inline]
    pub fn advance(self, position: Position, amount: f32) -> Position {
        match self {
            Axis::Horizontal => Position::new(position.x + amount, position.y),
            Axis::Vertical => Position::new(position.x, position.y + amount),
        }
    }
}
