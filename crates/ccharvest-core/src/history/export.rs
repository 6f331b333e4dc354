//! CSV export of the downloads table.

use std::path::Path;

use super::HistoryTable;
use crate::error::HarvestError;

/// Writes `table` to `path` as CSV: header row of column names, then one
/// record per row in the same order. NULL values become empty fields; the
/// csv writer applies standard quoting for delimiters, quotes, and newlines.
///
/// Filesystem failures surface as a write error; nothing is retried.
pub fn export_history(table: &HistoryTable, path: &Path) -> Result<(), HarvestError> {
    let csv_err = |source| HarvestError::WriteCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(&table.columns).map_err(csv_err)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(|v| v.as_deref().unwrap_or("")))
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|source| HarvestError::WriteIo {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("download history saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> HistoryTable {
        HistoryTable {
            columns: vec!["id".into(), "tab_url".into(), "note".into()],
            rows: vec![
                vec![
                    Some("1".into()),
                    Some("https://cc.example/file?h=a".into()),
                    Some("plain".into()),
                ],
                vec![
                    Some("2".into()),
                    None,
                    Some("has,comma and \"quotes\"\nand newline".into()),
                ],
            ],
        }
    }

    #[test]
    fn export_roundtrips_through_csv_parser() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("downloads_history.csv");
        let table = sample_table();
        export_history(&table, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["id", "tab_url", "note"])
        );
        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][1], "https://cc.example/file?h=a");
        // NULL exported as empty field.
        assert_eq!(&records[1][1], "");
        // Quoting preserved the awkward value verbatim.
        assert_eq!(&records[1][2], "has,comma and \"quotes\"\nand newline");
    }

    #[test]
    fn export_to_unwritable_path_fails() {
        let table = sample_table();
        let err = export_history(&table, Path::new("/nonexistent/dir/out.csv")).unwrap_err();
        assert!(matches!(err, HarvestError::WriteCsv { .. }));
    }
}
