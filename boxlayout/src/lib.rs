//! Boxlayout: single-axis box packing for UI containers.
//!
//! A box lays its children end to end along one axis, each at its minimum
//! size, and stretches them to fill the container along the other axis.
//! Children can opt into a weighted share of the leftover space, and
//! [`Spacer`]s soak it up without rendering anything.
//!
//! # Usage
//!
//! ```
//! use boxlayout::{BoxLayout, LayoutObject, Position, Size};
//!
//! struct Label { min: Size, position: Position, size: Size }
//!
//! impl LayoutObject for Label {
//!     fn is_visible(&self) -> bool { true }
//!     fn min_size(&self) -> Size { self.min }
//!     fn move_to(&mut self, position: Position) { self.position = position; }
//!     fn resize(&mut self, size: Size) { self.size = size; }
//! }
//!
//! let layout = BoxLayout::custom_padded_vertical(4.0);
//! let mut labels: Vec<Label> = (0..3)
//!     .map(|_| Label { min: Size::new(20.0, 10.0), position: Position::ORIGIN, size: Size::ZERO })
//!     .collect();
//!
//! assert_eq!(layout.min_size(&labels), Size::new(20.0, 38.0));
//! layout.layout(&mut labels, Size::new(100.0, 60.0));
//! assert_eq!(labels[2].position, Position::new(0.0, 28.0));
//! ```
//!
//! Layouts built with [`BoxLayout::vertical`] or [`BoxLayout::horizontal`]
//! take their padding from the ambient [`theme`].

pub mod axis;
pub mod box_layout;
pub mod error;
pub mod object;
pub mod padding;
pub mod primitives;
pub mod spacer;
pub mod theme;

pub use axis::Axis;
pub use box_layout::{BoxLayout, Layout};
pub use error::ThemeError;
pub use object::{Expansion, Grow, LayoutObject, Role};
pub use padding::Padding;
pub use primitives::{Position, Size};
pub use spacer::Spacer;
pub use theme::Theme;
