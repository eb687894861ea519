use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LatticeError;
use crate::point::Point;

/// Read one point per line: whitespace-separated integer fields, the first
/// `dimension` fields in order. Blank lines and lines starting with `#` are
/// skipped; file order is preserved.
pub fn points_from_reader<R: BufRead>(
    input: R,
    dimension: usize,
) -> Result<Vec<Point>, LatticeError> {
    let columns: Vec<usize> = (0..dimension).collect();
    points_from_reader_with_columns(input, &columns)
}

/// Like [`points_from_reader`], with explicit column selection: field
/// `columns[k]` of each line becomes coordinate `k` of the point.
///
/// A qualifying line that is missing a selected column or holds a
/// non-integer field is a parse error carrying the 1-based line number.
///
/// # Panics
/// Panics if `columns` is empty.
pub fn points_from_reader_with_columns<R: BufRead>(
    input: R,
    columns: &[usize],
) -> Result<Vec<Point>, LatticeError> {
    assert!(!columns.is_empty(), "at least one column is required");
    let mut points = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let mut coords = Vec::with_capacity(columns.len());
        for &col in columns {
            let field = fields.get(col).ok_or_else(|| {
                LatticeError::Parse(format!(
                    "line {}: expected a value in column {}, found {} field(s)",
                    index + 1,
                    col,
                    fields.len()
                ))
            })?;
            let value = field.parse::<i64>().map_err(|_| {
                LatticeError::Parse(format!(
                    "line {}: '{}' is not an integer",
                    index + 1,
                    field
                ))
            })?;
            coords.push(value);
        }
        points.push(Point::new(&coords));
    }
    Ok(points)
}

pub fn points_from_str(input: &str, dimension: usize) -> Result<Vec<Point>, LatticeError> {
    points_from_reader(input.as_bytes(), dimension)
}

pub fn points_from_file<P: AsRef<Path>>(
    path: P,
    dimension: usize,
) -> Result<Vec<Point>, LatticeError> {
    let file = File::open(path)?;
    points_from_reader(BufReader::new(file), dimension)
}

pub fn points_from_file_with_columns<P: AsRef<Path>>(
    path: P,
    columns: &[usize],
) -> Result<Vec<Point>, LatticeError> {
    let file = File::open(path)?;
    points_from_reader_with_columns(BufReader::new(file), columns)
}
