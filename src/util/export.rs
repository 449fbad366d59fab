//! Copying dashboard tables to the clipboard.

use crate::error::Result;
use crate::views::TableView;
use arboard::Clipboard;

/// Copy a table to the clipboard as TSV, preceded by its title.
///
/// Returns the number of data rows copied.
pub fn copy_table(table: &TableView) -> Result<usize> {
    let mut text = format!("{}\n", table.title);
    text.push_str(&table.to_tsv());

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(table.rows.len())
}
