//! Spacer - a child that fills leftover space and renders nothing.
//!
//! Place spacers between children of a box to push them apart. When a box
//! holds several spacers, the leftover space is split equally between them.

use crate::object::{Expansion, LayoutObject};
use crate::primitives::{Position, Size};

/// An invisible filler element.
///
/// By default a spacer expands along both axes, so it works in vertical and
/// horizontal boxes alike. Fixing an axis turns that expansion off; the spacer
/// is then laid out as an ordinary zero-sized child on that axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spacer {
    /// Do not expand along the horizontal axis.
    pub fix_horizontal: bool,
    /// Do not expand along the vertical axis.
    pub fix_vertical: bool,

    position: Position,
    size: Size,
    hidden: bool,
}

impl Spacer {
    /// A spacer expanding along both axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A spacer with the given axes fixed.
    pub fn fixed(fix_horizontal: bool, fix_vertical: bool) -> Self {
        Self {
            fix_horizontal,
            fix_vertical,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }
}

impl LayoutObject for Spacer {
    fn is_visible(&self) -> bool {
        !self.hidden
    }

    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn expansion(&self) -> Option<Expansion> {
        Some(Expansion::new(!self.fix_horizontal, !self.fix_vertical))
    }
}
