//! BoxLayout - stacks children along one axis.
//!
//! A vertical box packs children into a single column, a horizontal box into
//! a single row. Each child is rendered at its minimum main-axis size and is
//! stretched to the container along the cross axis. Leftover main-axis space
//! goes to two independent pools:
//!
//! - growable children share it in proportion to `grow_factor × min` weight
//! - spacers split it equally and render nothing
//!
//! Both pools draw on the same leftover amount. Boxes are not expected to mix
//! the two; a box that does ends up longer than its container.
//!
//! Exactly one padding gap separates consecutive visible non-spacer children.
//! Hidden children are skipped entirely.

use crate::axis::Axis;
use crate::object::{LayoutObject, Role};
use crate::padding::Padding;
use crate::primitives::{Position, Size};

/// A container layout arranging children along one axis.
pub trait Layout {
    /// Smallest size that fits every visible child at its minimum size.
    fn min_size(&self, objects: &[Box<dyn LayoutObject>]) -> Size;

    /// Position and size `objects` within a container of `size`.
    fn layout(&self, objects: &mut [Box<dyn LayoutObject>], size: Size);
}

/// Box layout along a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLayout {
    axis: Axis,
    padding: Padding,
}

/// Totals gathered by the measure pass.
#[derive(Debug, Clone, Copy, Default)]
struct Measure {
    visible: usize,
    spacers: usize,
    total_min: f32,
    grow_weight: f32,
}

impl BoxLayout {
    pub fn new(axis: Axis, padding: Padding) -> Self {
        Self { axis, padding }
    }

    /// Top-to-bottom column using theme padding.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical, Padding::Theme)
    }

    /// Left-to-right row using theme padding.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal, Padding::Theme)
    }

    /// Column with a fixed padding instead of the theme's.
    pub fn custom_padded_vertical(padding: f32) -> Self {
        Self::new(Axis::Vertical, Padding::Fixed(padding))
    }

    /// Row with a fixed padding instead of the theme's.
    pub fn custom_padded_horizontal(padding: f32) -> Self {
        Self::new(Axis::Horizontal, Padding::Fixed(padding))
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Smallest size that satisfies all the child objects.
    ///
    /// The main axis is the sum of every visible non-spacer child's minimum
    /// plus one padding between each; the cross axis is the largest child
    /// minimum. Spacers and hidden children contribute nothing.
    pub fn min_size<O: LayoutObject>(&self, objects: &[O]) -> Size {
        let axis = self.axis;
        let padding = self.padding.resolve();

        let mut main = 0.0f32;
        let mut cross = 0.0f32;
        let mut add_padding = false;

        for child in objects {
            if !child.is_visible() || Role::of(child, axis) == Role::Spacer {
                continue;
            }

            let child_min = child.min_size();
            cross = cross.max(axis.cross(child_min));
            main += axis.main(child_min);
            if add_padding {
                main += padding;
            }
            add_padding = true;
        }

        axis.size(main, cross)
    }

    /// Pack all child objects into `size`.
    ///
    /// Children are placed end to end in order, each filling the container's
    /// cross axis. Leftover space is handed to growable children and spacers;
    /// it is not clamped, so a container smaller than the aggregate minimum
    /// yields negative leftover and shrinks growable children accordingly.
    pub fn layout<O: LayoutObject>(&self, objects: &mut [O], size: Size) {
        let axis = self.axis;
        let cross = axis.cross(size);

        let measure = self.measure(objects, cross);

        let padding = self.padding.resolve();
        let extra = axis.main(size)
            - measure.total_min
            - padding * (measure.visible as f32 - 1.0);

        let per_weight = if measure.grow_weight > 0.0 {
            extra / measure.grow_weight
        } else {
            0.0
        };
        let per_spacer = if measure.spacers > 0 {
            extra / measure.spacers as f32
        } else {
            0.0
        };

        tracing::trace!(
            ?axis,
            visible = measure.visible,
            spacers = measure.spacers,
            total_min = measure.total_min,
            grow_weight = measure.grow_weight,
            extra,
            "box layout measured"
        );
        if extra < 0.0 {
            tracing::debug!(?axis, extra, "box container smaller than its minimum size");
        }

        let mut cursor = Position::ORIGIN;
        for child in objects.iter_mut() {
            if !child.is_visible() {
                continue;
            }

            let grow = match Role::of(&*child, axis) {
                Role::Spacer => {
                    cursor = axis.advance(cursor, per_spacer);
                    continue;
                }
                Role::Growable(factor) => Some(factor),
                Role::Ordinary => None,
            };

            child.move_to(cursor);

            let mut main = axis.main(child.min_size());
            if let Some(factor) = grow {
                main += per_weight * factor * main;
                child.resize(axis.size(main, cross));
            }
            cursor = axis.advance(cursor, padding + main);
        }
    }

    /// First pass: total up minimums and grow weights, and settle the size of
    /// ordinary children, which never receive extra space.
    fn measure<O: LayoutObject>(&self, objects: &mut [O], cross: f32) -> Measure {
        let axis = self.axis;
        let mut measure = Measure::default();

        for child in objects.iter_mut() {
            if !child.is_visible() {
                continue;
            }

            let role = Role::of(&*child, axis);
            if role == Role::Spacer {
                measure.spacers += 1;
                continue;
            }

            measure.visible += 1;

            let min = axis.main(child.min_size());
            measure.total_min += min;
            match role {
                // A zero-minimum child still carries weight.
                Role::Growable(factor) => measure.grow_weight += factor * min.max(1.0),
                _ => child.resize(axis.size(min, cross)),
            }
        }

        measure
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::vertical()
    }
}

impl Layout for BoxLayout {
    fn min_size(&self, objects: &[Box<dyn LayoutObject>]) -> Size {
        BoxLayout::min_size(self, objects)
    }

    fn layout(&self, objects: &mut [Box<dyn LayoutObject>], size: Size) {
        BoxLayout::layout(self, objects, size)
    }
}
