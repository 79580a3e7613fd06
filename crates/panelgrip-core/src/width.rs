#![forbid(unsafe_code)]

//! Width model: starting-width specification, symbolic content-width
//! presets, clamp bounds, and the computed panel style.
//!
//! # Design Notes
//!
//! - Widths are `f64` CSS pixels. Integral values render without a
//!   fractional part (`500.0` → `"500px"`), matching host style strings.
//! - A symbolic starting width resolves to a CSS variable reference and has
//!   no numeric value; clamping and drag math only apply once a drag has
//!   established a concrete pixel baseline.
//! - `min > max` is deliberately not validated. The clamp applies the max
//!   bound first and the min bound last, so contradictory bounds resolve to
//!   the min bound (last-write-wins). Treat such input as undefined.

use serde::{Deserialize, Serialize};

/// Symbolic content-width token understood by the embedding stylesheet.
///
/// Each preset names a CSS custom property; the numeric fallback is only
/// consulted when a drag starts while the panel width is still symbolic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentWidthPreset {
    Compact,
    #[default]
    Medium,
    Wide,
}

impl ContentWidthPreset {
    /// CSS variable reference for this preset.
    #[must_use]
    pub const fn css_var(self) -> &'static str {
        match self {
            Self::Compact => "var(--content-width-compact)",
            Self::Medium => "var(--content-width-medium)",
            Self::Wide => "var(--content-width-wide)",
        }
    }

    /// Pixel baseline used when a drag begins before any concrete width
    /// exists. Matches the stylesheet defaults for the presets.
    #[must_use]
    pub const fn fallback_px(self) -> f64 {
        match self {
            Self::Compact => 640.0,
            Self::Medium => 768.0,
            Self::Wide => 1024.0,
        }
    }
}

/// Starting width for the panel: a concrete pixel value or a symbolic
/// content-width token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingWidth {
    /// Literal pixel width.
    Px(f64),
    /// Named symbolic size resolved by the embedding stylesheet.
    Content(ContentWidthPreset),
}

impl StartingWidth {
    /// The default symbolic width (`contentWidth` with the medium preset).
    #[must_use]
    pub const fn content_width() -> Self {
        Self::Content(ContentWidthPreset::Medium)
    }

    /// Whether this width is symbolic (no numeric value yet).
    #[must_use]
    pub const fn is_symbolic(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    /// Concrete pixel value, if one exists.
    #[must_use]
    pub const fn px(&self) -> Option<f64> {
        match self {
            Self::Px(px) => Some(*px),
            Self::Content(_) => None,
        }
    }

    /// Pixel baseline for drag math: the literal value, or the preset
    /// fallback when symbolic.
    #[must_use]
    pub const fn baseline_px(&self) -> f64 {
        match self {
            Self::Px(px) => *px,
            Self::Content(preset) => preset.fallback_px(),
        }
    }

    /// Style descriptor for this width.
    #[must_use]
    pub fn style(&self) -> PanelStyle {
        match self {
            Self::Px(px) => PanelStyle::px(*px),
            Self::Content(preset) => PanelStyle::var(*preset),
        }
    }
}

impl From<f64> for StartingWidth {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

/// Computed style descriptor for the panel.
///
/// The embedding UI applies this to the panel element; it is the only style
/// surface this crate produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStyle {
    /// CSS width value: `"<n>px"` or a `var(...)` reference.
    pub width: String,
}

impl PanelStyle {
    /// Style for a concrete pixel width.
    #[must_use]
    pub fn px(width: f64) -> Self {
        Self {
            width: format_px(width),
        }
    }

    /// Style for a symbolic content-width preset.
    #[must_use]
    pub fn var(preset: ContentWidthPreset) -> Self {
        Self {
            width: preset.css_var().to_string(),
        }
    }
}

/// Format a pixel width the way hosts write style strings: integral values
/// carry no fractional part.
fn format_px(width: f64) -> String {
    if width.fract() == 0.0 && width.abs() < 9e15 {
        format!("{}px", width as i64)
    } else {
        format!("{width}px")
    }
}

/// Optional lower/upper clamp bounds for the panel width.
///
/// A missing bound means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WidthBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl WidthBounds {
    /// Bounds with both sides configured.
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Unbounded on both sides.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Clamp a candidate width, skipping missing bounds.
    ///
    /// Max first, min last: with contradictory bounds the min wins.
    #[must_use]
    pub fn clamp(&self, candidate: f64) -> f64 {
        let mut width = candidate;
        if let Some(max) = self.max {
            width = width.min(max);
        }
        if let Some(min) = self.min {
            width = width.max(min);
        }
        width
    }

    /// Whether every configured bound is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_none_or(f64::is_finite) && self.max.is_none_or(f64::is_finite)
    }
}
