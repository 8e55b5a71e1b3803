use crate::models::Tearsheet;
use crate::tables::TableView;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Read a tearsheet document from a JSON file.
pub fn load_tearsheet<P: AsRef<Path>>(path: P) -> Result<Tearsheet> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing tearsheet {}", path.display()))
}

/// Serialize any value as JSON, pretty-printed on request.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Save a value as JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    f.write_all(to_json(value, pretty)?.as_bytes())?;
    Ok(())
}

/// Save a rendered table as CSV: header row of column names, then formatted cells.
pub fn save_table_csv<P: AsRef<Path>>(table: &TableView, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{Align, ColumnView};
    use tempfile::tempdir;

    #[test]
    fn write_table_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("t.csv");
        let jsonp = dir.path().join("t.json");
        let table = TableView {
            title: "Top positions".into(),
            columns: vec![
                ColumnView {
                    name: "Symbol".into(),
                    align: Align::Left,
                },
                ColumnView {
                    name: "Weight".into(),
                    align: Align::Right,
                },
            ],
            rows: vec![vec!["AAPL".into(), "1,234.50".into()]],
            empty_message: None,
        };
        save_table_csv(&table, &csvp).unwrap();
        save_json(&table, &jsonp, true).unwrap();
        let csv_text = fs::read_to_string(&csvp).unwrap();
        assert_eq!(csv_text, "Symbol,Weight\nAAPL,\"1,234.50\"\n");
        assert!(jsonp.exists());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_tearsheet("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
