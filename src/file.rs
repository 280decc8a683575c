// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::WriterBuilder;

use crate::config::options::ExportOptions;
use crate::data::Table;
use crate::error::{Error, Result};

/// Write one table to `export.out_path()` (format, headers policy from ExportOptions).
/// Returns the final path written to.
pub fn export_table(export: &ExportOptions, table: &Table) -> Result<PathBuf> {
    let path = export.out_path();
    write_table(&path, table, export.format.delim(), export.include_headers)?;
    logf!("Exported {} row(s) to {}", table.len(), path.display());
    Ok(path)
}

/// Write several tables side by side: `<stem>_<name>.<ext>` each.
pub fn export_tables(export: &ExportOptions, tables: &[(&str, &Table)]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(tables.len());
    for (name, table) in tables {
        let path = export.out_path_for(name);
        write_table(&path, table, export.format.delim(), export.include_headers)?;
        logf!("Exported {} row(s) to {}", table.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

/// Ensure parent dir exists; create/truncate file; optionally write header.
pub fn write_table(path: &Path, table: &Table, delim: u8, headers: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut w = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_path(path)?;
    if headers {
        w.write_record(&table.headers)?;
    }
    for row in &table.rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// The table as delimited text (clipboard copy).
pub fn to_delimited_string(table: &Table, delim: u8, headers: bool) -> Result<String> {
    let mut w = WriterBuilder::new().delimiter(delim).flexible(true).from_writer(Vec::new());
    if headers {
        w.write_record(&table.headers)?;
    }
    for row in &table.rows {
        w.write_record(row)?;
    }
    let bytes = w.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn delimited_string_quotes_as_needed() {
        let t = Table {
            headers: vec![s!("title"), s!("price in $")],
            rows: vec![vec![s!("a, b"), s!("1")]],
        };
        assert_eq!(to_delimited_string(&t, b',', true).unwrap(), "title,price in $\n\"a, b\",1\n");
        assert_eq!(to_delimited_string(&t, b'\t', false).unwrap(), "a, b\t1\n");
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let p = temp_dir().join("market_lens_file_unit.txt");
        fs::write(&p, "x").unwrap();
        assert!(matches!(ensure_directory(&p), Err(Error::Config(_))));
    }
}
