//! SQLite extraction of the downloads table.

use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite, TypeInfo, ValueRef};
use std::path::Path;

use super::HistoryTable;
use crate::error::HarvestError;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special
/// chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Reads the entire downloads table from the snapshot at `snapshot_path`.
///
/// The store is opened read-only; no filtering or transformation is applied.
/// Open and query failures both map to [`HarvestError::Extraction`].
pub async fn extract_downloads(snapshot_path: &Path) -> Result<HistoryTable, HarvestError> {
    let uri = path_to_sqlite_uri(snapshot_path) + "?mode=ro";
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&uri)
        .await?;

    let result = read_table(&pool).await;
    pool.close().await;
    result
}

async fn read_table(pool: &Pool<Sqlite>) -> Result<HistoryTable, HarvestError> {
    // PRAGMA gives the schema even when the table is empty.
    let column_rows = sqlx::query("PRAGMA table_info(downloads)")
        .fetch_all(pool)
        .await?;
    let columns: Vec<String> = column_rows
        .iter()
        .map(|row| row.get::<String, _>("name"))
        .collect();

    let rows = sqlx::query("SELECT * FROM downloads").fetch_all(pool).await?;

    let mut out = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut values = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            values.push(decode_value(row, idx)?);
        }
        out.push(values);
    }

    Ok(HistoryTable { columns, rows: out })
}

/// Stringify one cell by its stored SQLite type. NULL becomes `None`; blobs
/// are decoded lossily (browser history blobs are rare and non-essential).
fn decode_value(row: &SqliteRow, idx: usize) -> Result<Option<String>, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(None);
    }
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "INTEGER" => row.try_get::<i64, _>(idx)?.to_string(),
        "REAL" => row.try_get::<f64, _>(idx)?.to_string(),
        "BLOB" => String::from_utf8_lossy(&row.try_get::<Vec<u8>, _>(idx)?).into_owned(),
        _ => row.try_get::<String, _>(idx)?,
    };
    Ok(Some(value))
}
