//! Named styles derived from a [`FormattingConfig`].

use super::FormattingConfig;
use crate::error::Result;
use crate::model::{cm_to_twips, Margins, PageSetup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Baseline the line spacing multiplier is applied to, in points.
pub const LINE_SPACING_BASELINE_PT: f32 = 12.0;

/// The style names shared by the style layer and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StyleName {
    /// Body text
    Normal,
    /// Title-page heading lines
    TitleStyle,
    /// `# ` headings
    Heading1Custom,
    /// `## ` headings
    Heading2Custom,
    /// `### ` headings
    Heading3Custom,
    /// Bullet items
    ListBullet,
    /// Grid tables
    TableGrid,
}

impl StyleName {
    /// Every style, in definition order.
    pub const ALL: [StyleName; 7] = [
        StyleName::Normal,
        StyleName::TitleStyle,
        StyleName::Heading1Custom,
        StyleName::Heading2Custom,
        StyleName::Heading3Custom,
        StyleName::ListBullet,
        StyleName::TableGrid,
    ];

    /// Style id as written into the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleName::Normal => "Normal",
            StyleName::TitleStyle => "TitleStyle",
            StyleName::Heading1Custom => "Heading1Custom",
            StyleName::Heading2Custom => "Heading2Custom",
            StyleName::Heading3Custom => "Heading3Custom",
            StyleName::ListBullet => "ListBullet",
            StyleName::TableGrid => "TableGrid",
        }
    }

    /// Human readable name shown in word processors.
    pub fn display_name(&self) -> &'static str {
        match self {
            StyleName::Normal => "Normal",
            StyleName::TitleStyle => "Title Style",
            StyleName::Heading1Custom => "Heading 1 Custom",
            StyleName::Heading2Custom => "Heading 2 Custom",
            StyleName::Heading3Custom => "Heading 3 Custom",
            StyleName::ListBullet => "List Bullet",
            StyleName::TableGrid => "Table Grid",
        }
    }

    /// Heading style for a level, `None` outside 1-3.
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(StyleName::Heading1Custom),
            2 => Some(StyleName::Heading2Custom),
            3 => Some(StyleName::Heading3Custom),
            _ => None,
        }
    }

    /// Heading level of this style, if it is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            StyleName::Heading1Custom => Some(1),
            StyleName::Heading2Custom => Some(2),
            StyleName::Heading3Custom => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a style applies to paragraphs or tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Paragraph,
    Table,
}

/// A resolved style definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDef {
    /// Paragraph or table style
    pub kind: StyleKind,

    /// Font family
    pub font_family: String,

    /// Font size in points
    pub size_pt: u32,

    /// Bold flag
    pub bold: bool,

    /// Exact line spacing in points, `None` inherits
    pub line_spacing_pt: Option<f32>,

    /// Id of the style this one is based on
    pub based_on: Option<String>,
}

impl StyleDef {
    fn paragraph(font_family: &str, size_pt: u32, bold: bool, line_spacing_pt: Option<f32>) -> Self {
        Self {
            kind: StyleKind::Paragraph,
            font_family: font_family.to_string(),
            size_pt,
            bold,
            line_spacing_pt,
            based_on: None,
        }
    }

    fn based_on(mut self, style_id: impl Into<String>) -> Self {
        self.based_on = Some(style_id.into());
        self
    }
}

/// Named styles plus the page geometry of one export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSet {
    /// Page size and margins
    pub page_setup: PageSetup,

    /// Style definitions by name
    pub styles: BTreeMap<StyleName, StyleDef>,
}

impl StyleSet {
    /// Look up a style.
    pub fn get(&self, name: StyleName) -> Option<&StyleDef> {
        self.styles.get(&name)
    }

    /// Iterate over all styles in name order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleName, &StyleDef)> {
        self.styles.iter().map(|(name, def)| (*name, def))
    }

    /// Number of defined styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if no style is defined.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Line spacing configured for a style, in points.
    pub fn line_spacing_pt(&self, name: StyleName) -> Option<f32> {
        self.get(name).and_then(|def| def.line_spacing_pt)
    }

    fn from_valid_config(config: &FormattingConfig) -> Self {
        let spacing = Some(config.line_spacing.multiplier() * LINE_SPACING_BASELINE_PT);
        let font = config.font_name.as_str();

        let mut styles = BTreeMap::new();
        styles.insert(
            StyleName::Normal,
            StyleDef::paragraph(font, config.font_size_normal, false, spacing),
        );
        styles.insert(
            StyleName::TitleStyle,
            StyleDef::paragraph(font, config.font_size_heading1, true, spacing),
        );
        styles.insert(
            StyleName::Heading1Custom,
            StyleDef::paragraph(font, config.font_size_heading1, true, spacing).based_on("Heading1"),
        );
        styles.insert(
            StyleName::Heading2Custom,
            StyleDef::paragraph(font, config.font_size_heading2, true, spacing).based_on("Heading2"),
        );
        styles.insert(
            StyleName::Heading3Custom,
            StyleDef::paragraph(font, config.font_size_heading3, true, spacing).based_on("Heading3"),
        );
        styles.insert(
            StyleName::ListBullet,
            StyleDef::paragraph(font, config.font_size_normal, false, None)
                .based_on(StyleName::Normal.as_str()),
        );
        styles.insert(
            StyleName::TableGrid,
            StyleDef {
                kind: StyleKind::Table,
                ..StyleDef::paragraph(font, config.font_size_normal, false, None)
            },
        );

        let margins = Margins {
            top: cm_to_twips(config.margin_top),
            bottom: cm_to_twips(config.margin_bottom),
            left: cm_to_twips(config.margin_left),
            right: cm_to_twips(config.margin_right),
        };

        Self {
            page_setup: PageSetup::letter().with_margins(margins),
            styles,
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::from_valid_config(&FormattingConfig::default())
    }
}

/// Derive the style set for one export.
///
/// Fails with [`crate::Error::Config`] before anything is built when the
/// configuration is invalid.
pub fn configure(config: &FormattingConfig) -> Result<StyleSet> {
    config.validate()?;
    let styles = StyleSet::from_valid_config(config);
    log::debug!(
        "Configured {} styles ({} pt line spacing, font '{}')",
        styles.len(),
        config.line_spacing.multiplier() * LINE_SPACING_BASELINE_PT,
        config.font_name
    );
    Ok(styles)
}
