//! Scene files: a box layout and its children described in JSON.
//!
//! ```json
//! {
//!   "axis": "horizontal",
//!   "padding": 5,
//!   "size": { "width": 100, "height": 30 },
//!   "children": [
//!     { "name": "ok", "min": { "width": 10, "height": 8 } },
//!     { "name": "gap", "spacer": {} },
//!     { "name": "cancel", "min": { "width": 20, "height": 8 }, "grow": 1 }
//!   ]
//! }
//! ```
//!
//! `padding` may be omitted to follow the theme, and `size` to lay the scene
//! out at its minimum size.

use std::path::Path;

use boxlayout::{Axis, BoxLayout, Expansion, LayoutObject, Padding, Position, Role, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("child '{name}': {reason}")]
    InvalidChild { name: String, reason: &'static str },

    #[error("invalid {0}: must be finite and non-negative")]
    InvalidValue(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub axis: Axis,
    #[serde(default)]
    pub padding: Option<f32>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub children: Vec<SceneObject>,
}

/// Spacer declaration; both axes expand unless turned off.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacerSpec {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Default for SpacerSpec {
    fn default() -> Self {
        Self {
            horizontal: true,
            vertical: true,
        }
    }
}

/// One child of a scene. Position and size are filled in by the layout.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub min: Size,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub grow: Option<f32>,
    #[serde(default)]
    pub spacer: Option<SpacerSpec>,

    #[serde(skip)]
    pub position: Position,
    #[serde(skip)]
    pub size: Size,
}

fn default_visible() -> bool {
    true
}

fn valid(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

impl LayoutObject for SceneObject {
    fn is_visible(&self) -> bool {
        self.visible
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

    fn expansion(&self) -> Option<Expansion> {
        self.spacer.map(|s| Expansion::new(s.horizontal, s.vertical))
    }
}

impl Scene {
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.padding.is_some_and(|p| !valid(p)) {
            return Err(SceneError::InvalidValue("padding"));
        }
        if self.size.is_some_and(|s| !valid(s.width) || !valid(s.height)) {
            return Err(SceneError::InvalidValue("size"));
        }
        for child in &self.children {
            let invalid = |reason| SceneError::InvalidChild {
                name: child.name.clone(),
                reason,
            };
            if !valid(child.min.width) || !valid(child.min.height) {
                return Err(invalid("minimum size must be finite and non-negative"));
            }
            if child.grow.is_some_and(|g| !valid(g)) {
                return Err(invalid("grow factor must be finite and non-negative"));
            }
        }
        Ok(())
    }

    pub fn box_layout(&self) -> BoxLayout {
        let padding = self.padding.map_or(Padding::Theme, Padding::Fixed);
        BoxLayout::new(self.axis, padding)
    }

    /// Run the layout over the scene's children and describe the result.
    pub fn run(&mut self) -> Report {
        let layout = self.box_layout();
        let min_size = layout.min_size(&self.children);
        let container = self.size.unwrap_or(min_size);

        tracing::info!(axis = ?self.axis, children = self.children.len(), "laying out scene");
        layout.layout(&mut self.children, container);

        let axis = self.axis;
        let children = self
            .children
            .iter()
            .map(|child| ChildReport::new(child, axis))
            .collect();

        Report {
            axis,
            padding: layout.padding().resolve(),
            container,
            min_size,
            children,
        }
    }
}

/// Outcome of laying out a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub axis: Axis,
    pub padding: f32,
    pub container: Size,
    pub min_size: Size,
    pub children: Vec<ChildReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildKind {
    Ordinary,
    Growable,
    Spacer,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildReport {
    pub name: String,
    pub kind: ChildKind,
    /// Placement, for children the layout positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl ChildReport {
    fn new(child: &SceneObject, axis: Axis) -> Self {
        let kind = if !child.visible {
            ChildKind::Hidden
        } else {
            match Role::of(child, axis) {
                Role::Ordinary => ChildKind::Ordinary,
                Role::Growable(_) => ChildKind::Growable,
                Role::Spacer => ChildKind::Spacer,
            }
        };
        let placed = matches!(kind, ChildKind::Ordinary | ChildKind::Growable);

        Self {
            name: child.name.clone(),
            kind,
            position: placed.then_some(child.position),
            size: placed.then_some(child.size),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:?} box, padding {}, container {}x{}, minimum {}x{}",
            self.axis,
            self.padding,
            self.container.width,
            self.container.height,
            self.min_size.width,
            self.min_size.height,
        )?;
        for child in &self.children {
            match (child.position, child.size) {
                (Some(p), Some(s)) => writeln!(
                    f,
                    "  {:<16} {:<9} at ({}, {}) size {}x{}",
                    child.name,
                    format!("{:?}", child.kind).to_lowercase(),
                    p.x,
                    p.y,
                    s.width,
                    s.height,
                )?,
                _ => writeln!(
                    f,
                    "  {:<16} {}",
                    child.name,
                    format!("{:?}", child.kind).to_lowercase(),
                )?,
            }
        }
        Ok(())
    }
}
