//! Pipe-table row parsing.

/// Check if a trimmed line belongs to a pipe table.
pub fn is_table_line(line: &str) -> bool {
    line.starts_with('|') && line.ends_with('|')
}

/// Split a table line into trimmed cells.
///
/// One leading and one trailing `|` are removed before splitting. Empty
/// fragments at the end of the row are discarded, empty cells in the middle
/// are kept so the columns stay aligned.
pub fn parse_table_row(line: &str) -> Vec<&str> {
    let line = line.trim();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    let mut fragments: Vec<&str> = inner.split('|').collect();
    while fragments.last().is_some_and(|f| f.is_empty()) {
        fragments.pop();
    }

    fragments.into_iter().map(str::trim).collect()
}

/// Check if a row is the header/body divider (`|---|:--|`).
pub fn is_divider_row(cells: &[&str]) -> bool {
    cells.iter().all(|cell| cell.trim().starts_with('-'))
}

/// Parse consecutive table lines into rows, dropping the divider row.
pub fn parse_table<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut rows: Vec<Vec<&str>> = lines.iter().map(|line| parse_table_row(line)).collect();
    if rows.len() > 1 && is_divider_row(&rows[1]) {
        rows.remove(1);
    }
    rows
}
