use std::fs;

use polars::prelude::*;
use tempfile::TempDir;
use titles_ingest::{IngestError, IngestOptions, read_dataset, write_dataset};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn text(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
    df.column(column)
        .expect("column")
        .str()
        .expect("string column")
        .get(idx)
        .map(str::to_string)
}

#[test]
fn reads_catalog_with_missing_cells() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "titles.csv",
        "show_id,type,title,director\ns1,Movie,Up,NaN\ns2,TV Show,\"Dark, Season\",\n",
    );
    let df = read_dataset(&path, &IngestOptions::default()).expect("read csv");
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 4);
    assert_eq!(text(&df, "title", 1).as_deref(), Some("Dark, Season"));
    assert_eq!(text(&df, "director", 1), None);
    assert_eq!(text(&df, "director", 0), None);
    assert_eq!(df.column("director").unwrap().null_count(), 2);
}

#[test]
fn short_rows_are_padded() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "short.csv", "a,b,c\n1,2\n");
    let df = read_dataset(&path, &IngestOptions::default()).expect("read csv");
    assert_eq!(text(&df, "b", 0).as_deref(), Some("2"));
    assert_eq!(text(&df, "c", 0), None);
}

#[test]
fn long_rows_are_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "long.csv", "a,b\n1,2\n1,2,3\n");
    let error = read_dataset(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        IngestError::RaggedRow { row: 2, found: 3, expected: 2, .. }
    ));
}

#[test]
fn repeated_headers_get_suffixes() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "dupe.csv", "title,title\nUp,Coco\n");
    let df = read_dataset(&path, &IngestOptions::default()).expect("read csv");
    assert_eq!(df.get_column_names_str(), vec!["title", "title.1"]);
    assert_eq!(text(&df, "title.1", 0).as_deref(), Some("Coco"));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let error = read_dataset(&dir.path().join("absent.csv"), &IngestOptions::default())
        .unwrap_err();
    assert!(matches!(error, IngestError::FileNotFound { .. }));
    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn custom_delimiter() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "semi.csv", "a;b\nx;y\n");
    let options = IngestOptions::new().with_delimiter(b';');
    let df = read_dataset(&path, &options).expect("read csv");
    assert_eq!(text(&df, "b", 0).as_deref(), Some("y"));
}

#[test]
fn written_file_reads_back() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out.csv");
    let df = DataFrame::new(vec![
        Column::new("title".into(), vec![Some("Up"), Some("Coco")]),
        Column::new("num_cast".into(), vec![Some(3i64), Some(0)]),
        Column::new("country".into(), vec![None, Some("Mexico")]),
    ])
    .expect("build frame");
    write_dataset(&path, &df).expect("write csv");

    let contents = fs::read_to_string(&path).expect("read output");
    assert!(contents.starts_with("title,num_cast,country\n"));

    let back = read_dataset(&path, &IngestOptions::default()).expect("read back");
    assert_eq!(back.get_column_names_str(), df.get_column_names_str());
    assert_eq!(text(&back, "num_cast", 0).as_deref(), Some("3"));
    assert_eq!(text(&back, "country", 0), None);
}
