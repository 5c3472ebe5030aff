//! Page geometry and block-level types.

use super::{Alignment, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// Twips per inch (1 twip = 1/20 point).
pub const TWIPS_PER_INCH: f64 = 1440.0;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Convert centimeters to twips, rounding to the nearest twip.
pub fn cm_to_twips(cm: f64) -> u32 {
    (cm / CM_PER_INCH * TWIPS_PER_INCH).round().max(0.0) as u32
}

/// Convert points to twips, rounding to the nearest twip.
pub fn points_to_twips(points: f32) -> u32 {
    (points * 20.0).round().max(0.0) as u32
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: u32,
    /// Bottom margin
    pub bottom: u32,
    /// Left margin
    pub left: u32,
    /// Right margin
    pub right: u32,
}

impl Margins {
    /// Same margin on all four sides.
    pub fn uniform(twips: u32) -> Self {
        Self {
            top: twips,
            bottom: twips,
            left: twips,
            right: twips,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(1440)
    }
}

/// Page size and margins of the document's single section, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width
    pub width: u32,

    /// Page height
    pub height: u32,

    /// Page margins
    pub margins: Margins,
}

impl PageSetup {
    /// US Letter (8.5 x 11 inches) with one-inch margins.
    pub fn letter() -> Self {
        Self {
            width: 12240,  // 8.5 * 1440
            height: 15840, // 11 * 1440
            margins: Margins::default(),
        }
    }

    /// Set margins and return self.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Width available for text between the side margins.
    pub fn text_width(&self) -> u32 {
        self.width
            .saturating_sub(self.margins.left)
            .saturating_sub(self.margins.right)
    }

    /// Height available for text between the top and bottom margins.
    pub fn text_height(&self) -> u32 {
        self.height
            .saturating_sub(self.margins.top)
            .saturating_sub(self.margins.bottom)
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

/// A content block in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A styled paragraph (headings, bullets and title lines included)
    Paragraph(Paragraph),

    /// A grid table
    Table(Table),

    /// A forced page break
    PageBreak,
}

impl Block {
    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }

    /// Get the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the table if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }
}

/// A field evaluated by the viewing application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterField {
    /// The current page number (`PAGE`)
    PageNumber,
}

impl FooterField {
    /// Field instruction as written into the document.
    pub fn instruction(&self) -> &'static str {
        match self {
            FooterField::PageNumber => "PAGE",
        }
    }
}

/// Footer of the primary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer paragraph alignment
    pub alignment: Alignment,

    /// The field shown in the footer
    pub field: FooterField,
}

impl Footer {
    /// A centered page-number footer.
    pub fn page_number() -> Self {
        Self {
            alignment: Alignment::Center,
            field: FooterField::PageNumber,
        }
    }
}
