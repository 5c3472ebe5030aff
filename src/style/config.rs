//! Formatting configuration.

use crate::error::{Error, Result};
use crate::model::CM_PER_INCH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// US Letter width in centimeters.
const PAGE_WIDTH_CM: f64 = 8.5 * CM_PER_INCH;

/// US Letter height in centimeters.
const PAGE_HEIGHT_CM: f64 = 11.0 * CM_PER_INCH;

/// Smallest text area (one inch) the margins must leave in each direction.
const MIN_TEXT_AREA_CM: f64 = CM_PER_INCH;

/// User-facing formatting options for one export.
///
/// Sizes are in points, margins in centimeters. Missing fields fall back to
/// the defaults when deserializing, so a partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Font family for every style
    pub font_name: String,

    /// Body text size
    pub font_size_normal: u32,

    /// Heading 1 and title size
    pub font_size_heading1: u32,

    /// Heading 2 size
    pub font_size_heading2: u32,

    /// Heading 3 size
    pub font_size_heading3: u32,

    /// Line spacing preset
    pub line_spacing: LineSpacing,

    /// Top margin (cm)
    pub margin_top: f64,

    /// Bottom margin (cm)
    pub margin_bottom: f64,

    /// Left margin (cm)
    pub margin_left: f64,

    /// Right margin (cm)
    pub margin_right: f64,
}

impl FormattingConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    /// Set the body and heading sizes in points.
    pub fn with_font_sizes(mut self, normal: u32, heading1: u32, heading2: u32, heading3: u32) -> Self {
        self.font_size_normal = normal;
        self.font_size_heading1 = heading1;
        self.font_size_heading2 = heading2;
        self.font_size_heading3 = heading3;
        self
    }

    /// Set the line spacing preset.
    pub fn with_line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the four margins in centimeters.
    pub fn with_margins(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Set the same margin on all sides, in centimeters.
    pub fn with_uniform_margin(self, cm: f64) -> Self {
        self.with_margins(cm, cm, cm, cm)
    }

    /// Check sizes and margins.
    ///
    /// Font sizes must be positive. Margins must be finite, non-negative and
    /// leave at least one inch of text area horizontally and vertically.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("font_size_normal", self.font_size_normal),
            ("font_size_heading1", self.font_size_heading1),
            ("font_size_heading2", self.font_size_heading2),
            ("font_size_heading3", self.font_size_heading3),
        ];
        for (name, size) in sizes {
            if size == 0 {
                return Err(Error::Config(format!("{} must be positive", name)));
            }
        }

        let margins = [
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
        ];
        for (name, cm) in margins {
            if !cm.is_finite() || cm < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number of centimeters, got {}",
                    name, cm
                )));
            }
        }

        if self.margin_left + self.margin_right > PAGE_WIDTH_CM - MIN_TEXT_AREA_CM {
            return Err(Error::Config(format!(
                "left and right margins ({} cm + {} cm) leave less than {} cm of text width",
                self.margin_left, self.margin_right, MIN_TEXT_AREA_CM
            )));
        }
        if self.margin_top + self.margin_bottom > PAGE_HEIGHT_CM - MIN_TEXT_AREA_CM {
            return Err(Error::Config(format!(
                "top and bottom margins ({} cm + {} cm) leave less than {} cm of text height",
                self.margin_top, self.margin_bottom, MIN_TEXT_AREA_CM
            )));
        }

        Ok(())
    }
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            font_name: "Times New Roman".to_string(),
            font_size_normal: 12,
            font_size_heading1: 16,
            font_size_heading2: 14,
            font_size_heading3: 12,
            line_spacing: LineSpacing::OneHalf,
            margin_top: 2.0,
            margin_bottom: 2.0,
            margin_left: 2.0,
            margin_right: 2.0,
        }
    }
}

/// Line spacing preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSpacing {
    /// Single spacing
    #[serde(rename = "Single", alias = "single")]
    Single,
    /// One and a half lines (default)
    #[default]
    #[serde(rename = "1.5 lines", alias = "1.5")]
    OneHalf,
    /// Double spacing
    #[serde(rename = "Double", alias = "double")]
    Double,
}

impl LineSpacing {
    /// All presets, in menu order.
    pub const ALL: [LineSpacing; 3] = [LineSpacing::Single, LineSpacing::OneHalf, LineSpacing::Double];

    /// Multiplier applied to the 12 pt baseline.
    pub fn multiplier(&self) -> f32 {
        match self {
            LineSpacing::Single => 1.0,
            LineSpacing::OneHalf => 1.5,
            LineSpacing::Double => 2.0,
        }
    }

    /// Textual form used in settings files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSpacing::Single => "Single",
            LineSpacing::OneHalf => "1.5 lines",
            LineSpacing::Double => "Double",
        }
    }
}

impl fmt::Display for LineSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineSpacing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "1" | "1.0" => Ok(LineSpacing::Single),
            "1.5 lines" | "1.5" | "one-half" | "onehalf" => Ok(LineSpacing::OneHalf),
            "double" | "2" | "2.0" => Ok(LineSpacing::Double),
            _ => Err(Error::Config(format!(
                "unknown line spacing '{}' (expected Single, 1.5 lines or Double)",
                s
            ))),
        }
    }
}
