// tests/export_tables.rs
use std::fs;
use std::path::PathBuf;

use market_lens::config::options::{ExportFormat, ExportOptions};
use market_lens::data::Table;
use market_lens::file;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("market_lens_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
    }
}

#[test]
fn export_respects_user_extension_when_format_changes() {
    let dir = tmp_dir("export_ext");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("picked.txt").to_str().unwrap());
    export.format = ExportFormat::Tsv;

    let t = table(&["title", "price in $"], &[&["Kush 28g", "180.00"]]);
    let path = file::export_table(&export, &t).unwrap();
    assert!(path.to_string_lossy().ends_with("picked.txt"));
    assert_eq!(fs::read_to_string(path).unwrap(), "title\tprice in $\nKush 28g\t180.00\n");
}

#[test]
fn multi_table_export_writes_one_file_per_table() {
    let dir = tmp_dir("export_multi");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("report").to_str().unwrap());
    export.include_headers = false;

    let offers = table(&["vendor", "title"], &[&["acme", "5g Cocaine"], &["bolt", "Kush, 28g"]]);
    let vendors = table(&["vendor"], &[&["acme"]]);
    let written = file::export_tables(&export, &[("offers", &offers), ("vendors", &vendors)]).unwrap();

    assert_eq!(written, vec![dir.join("report_offers.csv"), dir.join("report_vendors.csv")]);
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "acme,5g Cocaine\nbolt,\"Kush, 28g\"\n");
    assert_eq!(fs::read_to_string(&written[1]).unwrap(), "acme\n");
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("export_nested").join("a").join("b");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("out.csv").to_str().unwrap());

    let path = file::export_table(&export, &table(&["x"], &[])).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "x\n");
}
