//! Catalog loader — parses the tab-separated laptop catalog into `Laptop`
//! records.
//!
//! The file format: UTF-8, newline-delimited rows, tab-delimited columns,
//! header row required. Column names are matched case-sensitively but may
//! appear in any order.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use crate::models::laptop::Laptop;

const REQUIRED_COLUMNS: &[&str] = &["Name", "URL", "Price", "Brand"];
const OPTIONAL_COLUMNS: &[&str] = &["Processor", "Graphics Card", "Display Resolution", "Weight"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("missing required column '{0}' in catalog header")]
    MissingColumn(String),

    #[error("unrecognized column '{0}' in catalog header")]
    UnknownColumn(String),

    #[error("malformed row: wrong field count at line {line}")]
    WrongFieldCount { line: u64 },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

/// A row as it appears in the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(default, rename = "Processor")]
    processor: Option<String>,
    #[serde(default, rename = "Graphics Card")]
    graphics_card: Option<String>,
    #[serde(default, rename = "Display Resolution")]
    display_resolution: Option<String>,
    #[serde(default, rename = "Weight")]
    weight: Option<String>,
}

impl From<CatalogRow> for Laptop {
    fn from(row: CatalogRow) -> Self {
        Laptop {
            name: row.name,
            url: row.url,
            price: row.price,
            brand: row.brand,
            processor: row.processor,
            graphics_card: row.graphics_card,
            display_resolution: row.display_resolution,
            weight: row.weight,
        }
    }
}

/// Loads the catalog from `path`.
///
/// A missing or unreadable file is logged and yields an empty catalog —
/// callers treat that as "no data", not "no matches". Malformed content is
/// an explicit `CatalogError`.
pub fn load_catalog(path: &Path) -> Result<Vec<Laptop>, CatalogError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read catalog file {}: {e}", path.display());
            return Ok(Vec::new());
        }
    };
    parse_catalog(&content)
}

/// Parses catalog file content. Split from `load_catalog` so tests can feed
/// content directly.
pub fn parse_catalog(content: &str) -> Result<Vec<Laptop>, CatalogError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(classify_row_error)?
        .clone();
    validate_headers(&headers)?;

    let mut laptops = Vec::new();
    for row in reader.deserialize::<CatalogRow>() {
        let row = row.map_err(classify_row_error)?;
        laptops.push(row.into());
    }
    Ok(laptops)
}

/// Checks the header against the recognized column set before any row is
/// parsed: required columns must be present, unknown columns are rejected.
fn validate_headers(headers: &csv::StringRecord) -> Result<(), CatalogError> {
    let names: Vec<&str> = headers.iter().collect();

    for required in REQUIRED_COLUMNS {
        if !names.contains(required) {
            return Err(CatalogError::MissingColumn(required.to_string()));
        }
    }
    for name in &names {
        if !REQUIRED_COLUMNS.contains(name) && !OPTIONAL_COLUMNS.contains(name) {
            return Err(CatalogError::UnknownColumn(name.to_string()));
        }
    }
    Ok(())
}

fn classify_row_error(err: csv::Error) -> CatalogError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths { pos, .. } => CatalogError::WrongFieldCount {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
        },
        csv::ErrorKind::Deserialize { pos, err } => CatalogError::MalformedRow {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            reason: err.to_string(),
        },
        _ => CatalogError::MalformedRow {
            line: 0,
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_CATALOG: &str = "Name\tURL\tPrice\tBrand\tProcessor\tGraphics Card\tDisplay Resolution\tWeight\n\
        Inspiron 15\tu1\t52990\tDell\tIntel Core i5-1235U\tIntel Iris Xe\t1920x1080\t1.65 kg\n\
        IdeaPad 3\tu2\t38990\tLenovo\tAMD Ryzen 5 5500U\t\t1920x1080\t\n";

    #[test]
    fn test_parses_full_catalog() {
        let laptops = parse_catalog(FULL_CATALOG).unwrap();
        assert_eq!(laptops.len(), 2);
        assert_eq!(laptops[0].name, "Inspiron 15");
        assert_eq!(laptops[0].price, 52990.0);
        assert_eq!(laptops[0].processor.as_deref(), Some("Intel Core i5-1235U"));
        assert_eq!(laptops[1].brand, "Lenovo");
    }

    #[test]
    fn test_empty_optional_fields_become_none() {
        let laptops = parse_catalog(FULL_CATALOG).unwrap();
        assert!(laptops[1].graphics_card.is_none());
        assert!(laptops[1].weight.is_none());
    }

    #[test]
    fn test_minimal_columns_leave_specs_absent() {
        let content = "Name\tURL\tPrice\tBrand\nA\tu1\t50000\tX\n";
        let laptops = parse_catalog(content).unwrap();
        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].name, "A");
        assert_eq!(laptops[0].price, 50000.0);
        assert!(laptops[0].processor.is_none());
        assert!(laptops[0].graphics_card.is_none());
        assert!(laptops[0].display_resolution.is_none());
        assert!(laptops[0].weight.is_none());
    }

    #[test]
    fn test_columns_may_appear_in_any_order() {
        let content = "Price\tBrand\tName\tURL\n61990\tHP\tPavilion 14\tu3\n";
        let laptops = parse_catalog(content).unwrap();
        assert_eq!(laptops[0].name, "Pavilion 14");
        assert_eq!(laptops[0].url, "u3");
        assert_eq!(laptops[0].price, 61990.0);
    }

    #[test]
    fn test_short_row_is_a_field_count_error_not_a_crash() {
        let content = "Name\tURL\tPrice\tBrand\nA\tu1\t50000\n";
        let err = parse_catalog(content).unwrap_err();
        match err {
            CatalogError::WrongFieldCount { line } => assert_eq!(line, 2),
            other => panic!("expected WrongFieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_long_row_is_a_field_count_error() {
        let content = "Name\tURL\tPrice\tBrand\nA\tu1\t50000\tX\textra\n";
        assert!(matches!(
            parse_catalog(content).unwrap_err(),
            CatalogError::WrongFieldCount { .. }
        ));
    }

    #[test]
    fn test_non_numeric_price_is_a_malformed_row() {
        let content = "Name\tURL\tPrice\tBrand\nA\tu1\tcheap\tX\n";
        assert!(matches!(
            parse_catalog(content).unwrap_err(),
            CatalogError::MalformedRow { line: 2, .. }
        ));
    }

    #[test]
    fn test_missing_required_column_is_rejected() {
        let content = "Name\tURL\tBrand\nA\tu1\tX\n";
        match parse_catalog(content).unwrap_err() {
            CatalogError::MissingColumn(column) => assert_eq!(column, "Price"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let content = "Name\tURL\tPrice\tBrand\tBattery\nA\tu1\t50000\tX\t5000mAh\n";
        match parse_catalog(content).unwrap_err() {
            CatalogError::UnknownColumn(column) => assert_eq!(column, "Battery"),
            other => panic!("expected UnknownColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_content_yields_empty_catalog() {
        assert!(parse_catalog("").unwrap().is_empty());
        assert!(parse_catalog("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_header_only_yields_empty_catalog() {
        let content = "Name\tURL\tPrice\tBrand\n";
        assert!(parse_catalog(content).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_urls_are_preserved() {
        let content = "Name\tURL\tPrice\tBrand\nA\tu1\t50000\tX\nA again\tu1\t48000\tX\n";
        let laptops = parse_catalog(content).unwrap();
        assert_eq!(laptops.len(), 2);
        assert_eq!(laptops[0].url, laptops[1].url);
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let laptops = load_catalog(Path::new("/nonexistent/catalog.tsv")).unwrap();
        assert!(laptops.is_empty());
    }

    #[test]
    fn test_load_catalog_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_CATALOG.as_bytes()).unwrap();

        let laptops = load_catalog(file.path()).unwrap();
        assert_eq!(laptops.len(), 2);
        assert_eq!(laptops[1].name, "IdeaPad 3");
    }
}
