//! Reader for the trimmed Tycho catalog text format.
//!
//! Each record is one line of exactly three whitespace-separated columns:
//!
//! ```text
//! <id:int> <right ascension:deg> <declination:deg>
//! ```
//!
//! Blank lines are skipped. Anything else that does not match the layout is a
//! fatal [`SeparationError`]; the reader never substitutes zeros for missing or
//! garbled fields. The number of records is bounded by a caller-supplied
//! capacity.

use std::path::Path;

use tracing::info;

use crate::error::{Result, SeparationError};
use crate::{Catalog, StarRecord};

/// Default catalog path, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/tycho-trimmed.csv";

/// Maximum number of records accepted unless the caller overrides it.
pub const DEFAULT_CATALOG_CAPACITY: usize = 30_000;

const COLUMNS: usize = 3;

/// Parse a single record line. `line_no` is 1-based, `record` is the 0-based
/// index this line would occupy in the catalog.
fn parse_record(line: &str, line_no: usize, record: usize) -> Result<StarRecord> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    if fields.len() > COLUMNS {
        return Err(SeparationError::TooManyColumns {
            line: line_no,
            record,
            found: fields.len(),
        });
    }
    if fields.len() < COLUMNS {
        return Err(SeparationError::MissingColumn {
            line: line_no,
            record,
            column: fields.len(),
        });
    }

    let id = fields[0]
        .parse::<i64>()
        .map_err(|_| invalid_field(line_no, "id", fields[0]))?;
    let ra_deg = parse_degrees(fields[1], line_no, "right ascension")?;
    let dec_deg = parse_degrees(fields[2], line_no, "declination")?;

    Ok(StarRecord::new(id, ra_deg, dec_deg))
}

fn parse_degrees(value: &str, line_no: usize, field: &'static str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid_field(line_no, field, value)),
    }
}

fn invalid_field(line_no: usize, field: &'static str, value: &str) -> SeparationError {
    SeparationError::InvalidField {
        line: line_no,
        field,
        value: value.to_string(),
    }
}

/// Parse a catalog from an in-memory string.
///
/// Fails on the first malformed line, or once more than `capacity` records
/// have been read.
pub fn parse_catalog(data: &str, capacity: usize) -> Result<Catalog> {
    let mut stars = Vec::with_capacity(capacity.min(DEFAULT_CATALOG_CAPACITY));
    for (idx, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if stars.len() == capacity {
            return Err(SeparationError::CapacityExceeded { capacity });
        }
        stars.push(parse_record(line, idx + 1, stars.len())?);
    }
    Ok(Catalog::new(stars))
}

/// Load a catalog file from disk.
pub fn load_catalog<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Catalog> {
    let path = path.as_ref();
    info!("Loading catalog from {}", path.display());
    let data = std::fs::read_to_string(path).map_err(|source| SeparationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&data, capacity)?;
    info!("Loaded {} catalog records", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_three_column_lines() {
        let data = "1 0.0 0.0\n2\t90.0   0.0\n\n3 0.0 90.0\n";
        let catalog = parse_catalog(data, DEFAULT_CATALOG_CAPACITY).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.stars()[1], StarRecord::new(2, 90.0, 0.0));
        assert_eq!(catalog.stars()[2].dec_deg, 90.0);
    }

    #[test]
    fn four_columns_is_fatal() {
        let data = "1 0.0 0.0\n2 1.0 2.0 3.0\n";
        let err = parse_catalog(data, DEFAULT_CATALOG_CAPACITY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputFormat);
        match err {
            SeparationError::TooManyColumns {
                line,
                record,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(record, 1);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_is_fatal() {
        let err = parse_catalog("5 12.5\n", DEFAULT_CATALOG_CAPACITY).unwrap_err();
        assert!(matches!(
            err,
            SeparationError::MissingColumn {
                line: 1,
                record: 0,
                column: 2
            }
        ));
    }

    #[test]
    fn garbled_fields_are_rejected() {
        let err = parse_catalog("x 1.0 2.0\n", 10).unwrap_err();
        assert!(matches!(err, SeparationError::InvalidField { field: "id", .. }));

        let err = parse_catalog("1 1.0 abc\n", 10).unwrap_err();
        assert!(matches!(
            err,
            SeparationError::InvalidField {
                field: "declination",
                ..
            }
        ));

        let err = parse_catalog("1 NaN 2.0\n", 10).unwrap_err();
        assert!(matches!(
            err,
            SeparationError::InvalidField {
                field: "right ascension",
                ..
            }
        ));
    }

    #[test]
    fn capacity_is_bounds_checked() {
        let data = "1 0 0\n2 1 1\n3 2 2\n";
        assert_eq!(parse_catalog(data, 3).unwrap().len(), 3);
        let err = parse_catalog(data, 2).unwrap_err();
        assert!(matches!(err, SeparationError::CapacityExceeded { capacity: 2 }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_catalog("definitely/not/here.csv", 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputFormat);
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }
}
