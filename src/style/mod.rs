//! Style configuration.
//!
//! Turns a user-facing [`FormattingConfig`] into the [`StyleSet`] the
//! renderer binds its blocks to: one definition per [`StyleName`] plus the
//! page geometry of the export.

mod config;
mod styles;

pub use config::{FormattingConfig, LineSpacing};
pub use styles::{configure, StyleDef, StyleKind, StyleName, StyleSet, LINE_SPACING_BASELINE_PT};
