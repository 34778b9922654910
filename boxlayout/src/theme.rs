//! Theme - ambient sizing values shared by every layout.
//!
//! Layouts that use theme padding read it from the current theme on every
//! call, so installing a new theme takes effect on the next layout pass
//! without rebuilding any layout objects.

use std::path::Path;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Sizing values for layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Space inserted between consecutive children of a box.
    pub padding: f32,
}

impl Theme {
    pub const DEFAULT_PADDING: f32 = 6.0;

    pub const DEFAULT: Self = Self {
        padding: Self::DEFAULT_PADDING,
    };

    /// Parse and validate a theme from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load and validate a theme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ThemeError::InvalidPadding(self.padding));
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static CURRENT: RwLock<Theme> = RwLock::new(Theme::DEFAULT);

/// The theme layouts currently read from.
pub fn current() -> Theme {
    *CURRENT.read().unwrap_or_else(PoisonError::into_inner)
}

/// Install `theme` as the current theme.
pub fn set_current(theme: Theme) {
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = theme;
    tracing::debug!(padding = theme.padding, "theme changed");
}

/// Padding of the current theme.
#[inline]
pub fn padding() -> f32 {
    current().padding
}
