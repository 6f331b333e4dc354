//! Browser download-history access.
//!
//! The downloads table is read verbatim: whatever columns the browser's
//! current schema has, in declared order, every value stringified. The only
//! column this tool interprets is `tab_url`.

mod export;
mod extract;

pub use export::export_history;
pub use extract::extract_downloads;

/// Column holding the page URL each download came from.
pub const TAB_URL_COLUMN: &str = "tab_url";

/// Rows and column names of the downloads table, unmodified after read.
#[derive(Debug, Clone)]
pub struct HistoryTable {
    /// Column names in declared order.
    pub columns: Vec<String>,
    /// One entry per row; values stringified, NULL as `None`, in column order.
    pub rows: Vec<Vec<Option<String>>>,
}

impl HistoryTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Non-null `tab_url` values in row order, duplicates included.
    /// Empty when the table has no `tab_url` column.
    pub fn links(&self) -> Vec<&str> {
        let Some(idx) = self.column_index(TAB_URL_COLUMN) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(idx).and_then(|v| v.as_deref()))
            .collect()
    }
}
