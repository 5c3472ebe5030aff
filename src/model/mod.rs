//! Output document model.
//!
//! This module defines the in-memory document the renderer produces from a
//! draft. It is independent of any file format: the DOCX, JSON and text
//! writers in [`crate::render`] all serialize from these types.

mod document;
mod page;
mod paragraph;
mod table;

pub use document::{Document, Metadata};
pub use page::{
    cm_to_twips, points_to_twips, Block, Footer, FooterField, Margins, PageSetup, CM_PER_INCH,
    TWIPS_PER_INCH,
};
pub use paragraph::{Alignment, Paragraph, RunKind, StyledRun};
pub use table::{Table, TableCell, TableRow};
