//! CSV loader for the review file.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use super::{Dataset, PRODUCT_COLUMN, ReviewRow, SUMMARY_COLUMN};

/// File name of the review table, resolved next to the executable.
pub const DEFAULT_DATASET_FILE: &str = "customer_reviews.csv";

/// Cell values read as missing, matching common spreadsheet/pandas exports.
const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Error)]
pub enum DatasetError {
    /// The path does not point at an existing file.
    #[error("Dataset not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read or parsed.
    #[error("Failed to load dataset {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadFailure,
    },
    /// The executable's directory could not be determined.
    #[error("Cannot resolve the application directory: {0}")]
    Locate(std::io::Error),
}

/// Reason a present file failed to load.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column {0}")]
    MissingColumn(&'static str),
    #[error("expected {expected} fields on line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// `customer_reviews.csv` in the directory holding the running executable.
pub fn default_dataset_path() -> Result<PathBuf, DatasetError> {
    let exe = std::env::current_exe().map_err(DatasetError::Locate)?;
    let dir = exe.parent().ok_or_else(|| {
        DatasetError::Locate(std::io::Error::new(
            ErrorKind::NotFound,
            "executable has no parent directory",
        ))
    })?;
    Ok(dir.join(DEFAULT_DATASET_FILE))
}

/// Read the header and the first `preview_rows` records of a review CSV.
pub fn load_dataset(path: &Path, preview_rows: usize) -> Result<Dataset, DatasetError> {
    if !path.is_file() {
        return Err(DatasetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let load_err = |source: LoadFailure| DatasetError::Load {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DatasetError::NotFound {
            path: path.to_path_buf(),
        },
        _ => load_err(err.into()),
    })?;
    let (headers, rows) = read_reviews(file, preview_rows).map_err(load_err)?;
    tracing::info!(
        "Loaded {} review rows from {}",
        rows.len(),
        path.display()
    );
    Ok(Dataset::new(path.to_path_buf(), headers, rows))
}

fn read_reviews(
    input: impl std::io::Read,
    preview_rows: usize,
) -> Result<(Vec<String>, Vec<ReviewRow>), LoadFailure> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let product = column_index(&headers, PRODUCT_COLUMN)?;
    let summary = column_index(&headers, SUMMARY_COLUMN)?;

    // Every record is validated; only the preview window is kept.
    let mut rows = Vec::with_capacity(preview_rows);
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        check_width(&record, headers.len())?;
        if rows.len() < preview_rows {
            rows.push(review_row(&record, headers.len(), product, summary));
        }
    }
    Ok((headers, rows))
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, LoadFailure> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(LoadFailure::MissingColumn(name))
}

fn check_width(record: &StringRecord, width: usize) -> Result<(), LoadFailure> {
    if record.len() > width {
        return Err(LoadFailure::RaggedRow {
            line: record.position().map_or(0, |pos| pos.line()),
            expected: width,
            found: record.len(),
        });
    }
    Ok(())
}

fn review_row(record: &StringRecord, width: usize, product: usize, summary: usize) -> ReviewRow {
    let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
    cells.resize(width, String::new());
    let summary = Some(cells[summary].as_str())
        .filter(|value| !is_null(value))
        .map(str::to_string);
    ReviewRow {
        product: cells[product].clone(),
        summary,
        cells,
        sentiment: None,
    }
}

fn is_null(value: &str) -> bool {
    NULL_MARKERS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_csv(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(DEFAULT_DATASET_FILE);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_required_columns_and_keeps_all_cells() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "ID,PRODUCT,SUMMARY\n1,Blender,great product\n2,Kettle,\"terrible, just terrible\"\n",
        );
        let dataset = load_dataset(&path, 10).unwrap();
        assert_eq!(dataset.headers(), ["ID", "PRODUCT", "SUMMARY"]);
        assert_eq!(dataset.len(), 2);
        let second = &dataset.rows()[1];
        assert_eq!(second.product, "Kettle");
        assert_eq!(second.summary.as_deref(), Some("terrible, just terrible"));
        assert_eq!(second.cells, ["2", "Kettle", "terrible, just terrible"]);
        assert!(!dataset.is_classified());
    }

    #[test]
    fn truncates_to_preview_rows() {
        let dir = tempdir().unwrap();
        let mut csv = String::from("PRODUCT,SUMMARY\n");
        for idx in 0..25 {
            csv.push_str(&format!("P{idx},review {idx}\n"));
        }
        let path = write_csv(dir.path(), &csv);
        let dataset = load_dataset(&path, 10).unwrap();
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.rows()[9].product, "P9");
    }

    #[test]
    fn empty_and_marker_summaries_are_null() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "PRODUCT,SUMMARY\nA,\nB,NaN\nC,n/a\nD,fine\nE\n");
        let dataset = load_dataset(&path, 10).unwrap();
        let summaries: Vec<_> = dataset.rows().iter().map(|r| r.summary.as_deref()).collect();
        assert_eq!(summaries, vec![None, None, None, Some("fine"), None]);
        assert_eq!(dataset.rows()[4].cells, ["E", ""]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(
            load_dataset(&path, 10),
            Err(DatasetError::NotFound { path: reported }) if reported == path
        ));
        assert!(matches!(
            load_dataset(dir.path(), 10),
            Err(DatasetError::NotFound { .. })
        ));
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "PRODUCT,TEXT\nA,great\n");
        assert!(matches!(
            load_dataset(&path, 10),
            Err(DatasetError::Load {
                source: LoadFailure::MissingColumn("SUMMARY"),
                ..
            })
        ));
    }

    #[test]
    fn empty_file_is_a_load_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "");
        assert!(matches!(
            load_dataset(&path, 10),
            Err(DatasetError::Load {
                source: LoadFailure::MissingColumn(_),
                ..
            })
        ));
    }

    #[test]
    fn rows_wider_than_header_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "PRODUCT,SUMMARY\nA,ok\nB,too,many\n");
        assert!(matches!(
            load_dataset(&path, 10),
            Err(DatasetError::Load {
                source: LoadFailure::RaggedRow {
                    line: 3,
                    expected: 2,
                    found: 3
                },
                ..
            })
        ));
    }

    #[test]
    fn malformed_rows_past_the_preview_window_fail_the_load() {
        let dir = tempdir().unwrap();
        let mut valid = String::from("PRODUCT,SUMMARY\n");
        for idx in 0..12 {
            valid.push_str(&format!("P{idx},review {idx}\n"));
        }

        let path = write_csv(dir.path(), &format!("{valid}X,too,many,fields\n"));
        assert!(matches!(
            load_dataset(&path, 10),
            Err(DatasetError::Load {
                source: LoadFailure::RaggedRow {
                    line: 14,
                    expected: 2,
                    found: 4
                },
                ..
            })
        ));

        let mut bytes = valid.into_bytes();
        bytes.extend_from_slice(b"Y,caf\xe9\n");
        std::fs::write(&path, bytes).unwrap();
        assert!(matches!(
            load_dataset(&path, 10),
            Err(DatasetError::Load {
                source: LoadFailure::Csv(_),
                ..
            })
        ));
    }

    #[test]
    fn empty_product_stays_a_raw_empty_string() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "PRODUCT,SUMMARY\n,great\nNaN,bad\n");
        let dataset = load_dataset(&path, 10).unwrap();
        let products: Vec<_> = dataset.rows().iter().map(|r| r.product.as_str()).collect();
        assert_eq!(products, vec!["", "NaN"]);
        assert_eq!(dataset.rows()[0].summary.as_deref(), Some("great"));
    }

    #[test]
    fn invalid_utf8_is_a_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_DATASET_FILE);
        std::fs::write(&path, b"PRODUCT,SUMMARY\nA,caf\xe9\n").unwrap();
        assert!(matches!(
            load_dataset(&path, 10),
            Err(DatasetError::Load {
                source: LoadFailure::Csv(_),
                ..
            })
        ));
    }

    #[test]
    fn headers_are_trimmed_and_bom_stripped() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "\u{feff}PRODUCT , SUMMARY\nA,good\n");
        let dataset = load_dataset(&path, 10).unwrap();
        assert_eq!(dataset.headers(), ["PRODUCT", "SUMMARY"]);
    }
}
