//! Draft text parsing.
//!
//! The draft is scanned line by line into [`RawBlock`]s, which borrow from
//! the input and are consumed immediately by the renderer. Inline markup is
//! handled separately by [`InlineScanner`].

mod block;
mod inline;
mod table;

pub use block::{
    is_bullet, strip_bullet_marker, BlockScanner, RawBlock, TITLE_PAGE_END, TITLE_PAGE_START,
};
pub use inline::InlineScanner;
pub use table::{is_divider_row, is_table_line, parse_table, parse_table_row};
