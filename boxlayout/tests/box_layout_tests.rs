//! Integration tests for box layout geometry.
//!
//! Every test uses fixed padding so none of them depend on the ambient theme.

use boxlayout::{Axis, BoxLayout, LayoutObject, Padding, Position, Size, Spacer};

/// A child with a fixed minimum size that records what the layout did to it.
#[derive(Debug, Clone, Default)]
struct Widget {
    min: Size,
    grow: Option<f32>,
    hidden: bool,
    spacer: bool,
    position: Position,
    size: Size,
}

impl Widget {
    fn new(width: f32, height: f32) -> Self {
        Self {
            min: Size::new(width, height),
            ..Self::default()
        }
    }

    fn growing(width: f32, height: f32, factor: f32) -> Self {
        Self {
            grow: Some(factor),
            ..Self::new(width, height)
        }
    }

    fn spacer() -> Self {
        Self {
            spacer: true,
            ..Self::default()
        }
    }

    fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }
}

impl LayoutObject for Widget {
    fn is_visible(&self) -> bool {
        !self.hidden
    }

    fn min_size(&self) -> Size {
        self.min
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn grow_factor(&self) -> Option<f32> {
        self.grow
    }

    fn expansion(&self) -> Option<boxlayout::Expansion> {
        self.spacer.then_some(boxlayout::Expansion::BOTH)
    }
}

fn positions(children: &[Widget]) -> Vec<Position> {
    children.iter().map(|c| c.position).collect()
}

fn sizes(children: &[Widget]) -> Vec<Size> {
    children.iter().map(|c| c.size).collect()
}

#[test]
fn test_vertical_scenario_leaves_trailing_space_unused() {
    let layout = BoxLayout::custom_padded_vertical(5.0);
    let mut children = vec![Widget::new(7.0, 20.0), Widget::new(3.0, 30.0), Widget::new(9.0, 40.0)];

    layout.layout(&mut children, Size::new(100.0, 210.0));

    assert_eq!(
        positions(&children),
        vec![Position::new(0.0, 0.0), Position::new(0.0, 25.0), Position::new(0.0, 60.0)]
    );
    assert_eq!(
        sizes(&children),
        vec![Size::new(100.0, 20.0), Size::new(100.0, 30.0), Size::new(100.0, 40.0)]
    );
}

#[test]
fn test_horizontal_scenario_single_spacer_takes_all_extra() {
    let layout = BoxLayout::custom_padded_horizontal(5.0);
    let mut children = vec![Widget::new(10.0, 8.0), Widget::spacer(), Widget::new(20.0, 8.0)];

    layout.layout(&mut children, Size::new(100.0, 30.0));

    assert_eq!(children[0].position, Position::new(0.0, 0.0));
    assert_eq!(children[2].position, Position::new(80.0, 0.0));
    assert_eq!(children[0].size, Size::new(10.0, 30.0));
    assert_eq!(children[2].size, Size::new(20.0, 30.0));
}

#[test]
fn test_layout_is_idempotent_for_ordinary_children() {
    let layout = BoxLayout::custom_padded_vertical(3.0);
    let mut children = vec![Widget::new(12.0, 11.5), Widget::new(40.0, 7.25), Widget::new(1.0, 0.0)];
    let size = Size::new(64.0, 90.0);

    layout.layout(&mut children, size);
    let first = (positions(&children), sizes(&children));
    layout.layout(&mut children, size);
    let second = (positions(&children), sizes(&children));

    assert_eq!(first, second);
}

#[test]
fn test_min_size_is_sum_plus_padding_and_max_cross() {
    let layout = BoxLayout::custom_padded_horizontal(2.5);
    let children = vec![Widget::new(10.0, 4.0), Widget::new(20.0, 9.0), Widget::new(5.0, 6.0)];

    assert_eq!(layout.min_size(&children), Size::new(35.0 + 2.5 * 2.0, 9.0));
}

#[test]
fn test_min_size_independent_of_container() {
    let layout = BoxLayout::custom_padded_vertical(1.0);
    let mut children = vec![Widget::new(10.0, 4.0), Widget::new(20.0, 9.0)];

    let before = layout.min_size(&children);
    layout.layout(&mut children, Size::new(5.0, 5.0));
    assert_eq!(layout.min_size(&children), before);
}

#[test]
fn test_hiding_a_child_removes_its_size_and_one_gap() {
    let layout = BoxLayout::custom_padded_vertical(4.0);
    let visible = vec![Widget::new(10.0, 10.0), Widget::new(30.0, 20.0), Widget::new(10.0, 10.0)];
    let mut hidden = visible.clone();
    hidden[1] = hidden[1].clone().hide();

    assert_eq!(layout.min_size(&visible), Size::new(30.0, 48.0));
    assert_eq!(layout.min_size(&hidden), Size::new(10.0, 24.0));

    layout.layout(&mut hidden, Size::new(10.0, 100.0));
    assert_eq!(hidden[2].position, Position::new(0.0, 14.0));
    assert_eq!(hidden[1].position, Position::ORIGIN);
    assert_eq!(hidden[1].size, Size::ZERO);
}

#[test]
fn test_growable_children_share_extra_in_proportion() {
    let layout = BoxLayout::custom_padded_horizontal(0.0);
    let mut children = vec![Widget::growing(20.0, 5.0, 1.0), Widget::growing(20.0, 5.0, 3.0)];

    // extra = 120 - 40 = 80; first gets 80/4, second 3*80/4
    layout.layout(&mut children, Size::new(120.0, 10.0));

    assert_eq!(children[0].size, Size::new(40.0, 10.0));
    assert_eq!(children[1].size, Size::new(80.0, 10.0));
    assert_eq!(children[1].position, Position::new(40.0, 0.0));
}

#[test]
fn test_growable_and_ordinary_mix() {
    let layout = BoxLayout::custom_padded_vertical(10.0);
    let mut children = vec![Widget::new(5.0, 30.0), Widget::growing(5.0, 20.0, 2.0)];

    // extra = 200 - 50 - 10 = 140; weight = 2 * 20 = 40; per weight = 3.5
    layout.layout(&mut children, Size::new(50.0, 200.0));

    assert_eq!(children[0].size, Size::new(50.0, 30.0));
    assert_eq!(children[1].position, Position::new(0.0, 40.0));
    assert_eq!(children[1].size, Size::new(50.0, 160.0));
}

#[test]
fn test_zero_minimum_growable_keeps_zero_size() {
    let layout = BoxLayout::custom_padded_vertical(0.0);
    let mut children = vec![Widget::growing(5.0, 0.0, 1.0), Widget::growing(5.0, 10.0, 1.0)];

    // weights are 1 (floored) and 10, but the share is scaled by the raw minimum
    layout.layout(&mut children, Size::new(5.0, 54.0));

    assert_eq!(children[0].size, Size::new(5.0, 0.0));
    assert_eq!(children[1].position, Position::new(0.0, 0.0));
    assert_eq!(children[1].size, Size::new(5.0, 50.0));
}

#[test]
fn test_two_spacers_split_extra_equally() {
    let layout = BoxLayout::custom_padded_vertical(5.0);
    let mut children = vec![
        Widget::spacer(),
        Widget::new(10.0, 20.0),
        Widget::spacer(),
        Widget::new(10.0, 30.0),
    ];

    // extra = 100 - 50 - 5 = 45; each spacer advances 22.5
    layout.layout(&mut children, Size::new(40.0, 100.0));

    assert_eq!(children[1].position, Position::new(0.0, 22.5));
    assert_eq!(children[3].position, Position::new(0.0, 22.5 + 20.0 + 5.0 + 22.5));
    assert_eq!(children[1].size, Size::new(40.0, 20.0));
    assert_eq!(children[3].size, Size::new(40.0, 30.0));
    assert_eq!(children[0].size, Size::ZERO);
    assert_eq!(children[2].position, Position::ORIGIN);
}

#[test]
fn test_spacers_and_growables_draw_from_same_extra() {
    let layout = BoxLayout::custom_padded_horizontal(0.0);
    let mut children = vec![Widget::growing(10.0, 5.0, 1.0), Widget::spacer(), Widget::new(10.0, 5.0)];

    // extra = 100 - 20 = 80, handed whole to both the growable and the spacer
    layout.layout(&mut children, Size::new(100.0, 5.0));

    assert_eq!(children[0].size, Size::new(90.0, 5.0));
    assert_eq!(children[2].position, Position::new(170.0, 0.0));
}

#[test]
fn test_cross_axis_always_matches_container() {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let layout = BoxLayout::new(axis, Padding::Fixed(2.0));
        let mut children = vec![
            Widget::new(5.0, 5.0),
            Widget::growing(50.0, 50.0, 1.0),
            Widget::new(500.0, 500.0),
        ];
        let container = Size::new(300.0, 300.0);

        layout.layout(&mut children, container);

        for child in &children {
            assert_eq!(axis.cross(child.size), axis.cross(container));
        }
    }
}

#[test]
fn test_negative_extra_is_not_clamped() {
    let layout = BoxLayout::custom_padded_vertical(0.0);
    let mut children = vec![Widget::new(10.0, 40.0), Widget::growing(10.0, 20.0, 1.0)];

    // extra = 50 - 60 = -10; weight 20 → growable loses 10
    layout.layout(&mut children, Size::new(10.0, 50.0));

    assert_eq!(children[0].size, Size::new(10.0, 40.0));
    assert_eq!(children[1].size, Size::new(10.0, 10.0));
}

#[test]
fn test_negative_extra_moves_spacer_backwards() {
    let layout = BoxLayout::custom_padded_horizontal(0.0);
    let mut children = vec![Widget::new(30.0, 5.0), Widget::spacer(), Widget::new(30.0, 5.0)];

    layout.layout(&mut children, Size::new(50.0, 5.0));

    assert_eq!(children[2].position, Position::new(20.0, 0.0));
}

#[test]
fn test_horizontal_mirrors_vertical() {
    let vertical = BoxLayout::custom_padded_vertical(3.0);
    let horizontal = BoxLayout::custom_padded_horizontal(3.0);

    let mut column = vec![Widget::new(8.0, 10.0), Widget::growing(8.0, 20.0, 1.0), Widget::new(8.0, 5.0)];
    let mut row: Vec<Widget> = column
        .iter()
        .map(|c| Widget {
            min: Size::new(c.min.height, c.min.width),
            ..c.clone()
        })
        .collect();

    vertical.layout(&mut column, Size::new(40.0, 100.0));
    horizontal.layout(&mut row, Size::new(100.0, 40.0));

    for (c, r) in column.iter().zip(&row) {
        assert_eq!(c.position.y, r.position.x);
        assert_eq!(c.size, Size::new(r.size.height, r.size.width));
    }
    assert_eq!(vertical.min_size(&column).height, horizontal.min_size(&row).width);
}

#[test]
fn test_spacer_element_fixed_along_axis_is_plain_child() {
    let layout = BoxLayout::custom_padded_vertical(5.0);
    let mut fixed = Spacer::fixed(false, true);
    let mut a = Widget::new(10.0, 10.0);
    let mut b = Widget::new(10.0, 10.0);
    {
        let mut children: Vec<&mut dyn LayoutObject> = vec![&mut a, &mut fixed, &mut b];
        assert_eq!(layout.min_size(&children), Size::new(10.0, 30.0));
        layout.layout(&mut children, Size::new(20.0, 100.0));
    }

    assert_eq!(fixed.position(), Position::new(0.0, 15.0));
    assert_eq!(fixed.size(), Size::new(20.0, 0.0));
    assert_eq!(b.position, Position::new(0.0, 20.0));
}

#[test]
fn test_empty_and_all_hidden_children() {
    let layout = BoxLayout::custom_padded_horizontal(5.0);
    let mut none: Vec<Widget> = Vec::new();
    layout.layout(&mut none, Size::new(10.0, 10.0));
    assert_eq!(layout.min_size(&none), Size::ZERO);

    let hidden = vec![Widget::new(10.0, 10.0).hide(), Widget::spacer().hide()];
    assert_eq!(layout.min_size(&hidden), Size::ZERO);
}
