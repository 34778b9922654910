//! The capability contract a child must offer to be laid out.
//!
//! Every child can be queried for visibility and minimum size, and can be
//! moved and resized. Two capabilities are optional:
//!
//! - a grow factor, which makes the child share leftover space by weight
//! - an [`Expansion`], which marks the child as a spacer on the axes it expands
//!
//! The layout never inspects a child more than through these methods. The
//! optional capabilities are resolved into a [`Role`] once per child per pass.

use crate::axis::Axis;
use crate::primitives::{Position, Size};

/// Axes a spacer expands along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expansion {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Expansion {
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };

    #[inline]
    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self { horizontal, vertical }
    }

    /// Whether a spacer with this expansion consumes space along `axis`.
    #[inline]
    pub fn expands(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// A child element positioned and sized by a layout.
pub trait LayoutObject {
    /// Hidden children take no space and are never moved or resized.
    fn is_visible(&self) -> bool;

    /// The smallest size this child can be rendered at.
    fn min_size(&self) -> Size;

    /// Place the child relative to its container's origin.
    fn move_to(&mut self, position: Position);

    /// Set the child's rendered size.
    fn resize(&mut self, size: Size);

    /// Weight for sharing leftover main-axis space.
    ///
    /// `None` means the child always renders at its minimum main-axis size.
    /// Factors are expected to be non-negative; a negative factor gives
    /// unspecified geometry.
    fn grow_factor(&self) -> Option<f32> {
        None
    }

    /// Spacer capability. `None` for anything that renders content.
    fn expansion(&self) -> Option<Expansion> {
        None
    }
}

/// How a child takes part in one layout pass along a given axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// Rendered at its minimum main-axis size.
    Ordinary,
    /// Receives a weighted share of leftover space.
    Growable(f32),
    /// Consumes an equal share of leftover space, renders nothing.
    Spacer,
}

impl Role {
    /// Resolve the role of `object` for a layout along `axis`.
    ///
    /// Spacer status takes precedence over a grow factor. A spacer that does
    /// not expand along `axis` is laid out like any other child.
    #[inline]
    pub fn of<O: LayoutObject + ?Sized>(object: &O, axis: Axis) -> Role {
        if object.expansion().is_some_and(|e| e.expands(axis)) {
            return Role::Spacer;
        }
        match object.grow_factor() {
            Some(factor) => Role::Growable(factor),
            None => Role::Ordinary,
        }
    }
}

impl<T: LayoutObject + ?Sized> LayoutObject for Box<T> {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn min_size(&self) -> Size {
        (**self).min_size()
    }

    fn move_to(&mut self, position: Position) {
        (**self).move_to(position)
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn grow_factor(&self) -> Option<f32> {
        (**self).grow_factor()
    }

    fn expansion(&self) -> Option<Expansion> {
        (**self).expansion()
    }
}

impl<T: LayoutObject + ?Sized> LayoutObject for &mut T {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn min_size(&self) -> Size {
        (**self).min_size()
    }

    fn move_to(&mut self, position: Position) {
        (**self).move_to(position)
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn grow_factor(&self) -> Option<f32> {
        (**self).grow_factor()
    }

    fn expansion(&self) -> Option<Expansion> {
        (**self).expansion()
    }
}

/// Wraps an object and gives it a grow factor.
///
/// ```
/// use boxlayout::{BoxLayout, Grow, Size, Spacer};
///
/// let layout = BoxLayout::custom_padded_horizontal(0.0);
/// let mut children = vec![Grow::new(Spacer::fixed(true, true), 1.0)];
/// layout.layout(&mut children, Size::new(50.0, 10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grow<O> {
    inner: O,
    factor: f32,
}

impl<O> Grow<O> {
    pub fn new(inner: O, factor: f32) -> Self {
        Self { inner, factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut O {
        &mut self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: LayoutObject> LayoutObject for Grow<O> {
    fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    fn min_size(&self) -> Size {
        self.inner.min_size()
    }

    fn move_to(&mut self, position: Position) {
        self.inner.move_to(position)
    }

    fn resize(&mut self, size: Size) {
        self.inner.resize(size)
    }

    fn grow_factor(&self) -> Option<f32> {
        Some(self.factor)
    }

    fn expansion(&self) -> Option<Expansion> {
        self.inner.expansion()
    }
}
