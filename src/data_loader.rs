//! Loading and column coercion for the chart dataset.
//!
//! The dataset is a headed CSV file. Columns are looked up by header name and
//! coerced on demand: cells that do not parse are treated as missing and the
//! row is left out of whatever view asked for that column.

use csv::StringRecord;
use indexmap::IndexMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::errors::{ChartError, ChartResult};

pub const GENRE_COLUMN: &str = "Genre";
pub const YEAR_COLUMN: &str = "Year";
pub const REVENUE_COLUMN: &str = "Revenue (Millions)";

/// Cell values read as "no value", the same set pandas treats as NA by default
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing_marker(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

#[derive(Debug, Clone)]
pub struct Dataset {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

/// Load a dataset from disk. A missing file is reported as
/// `ChartError::FileNotFound` so callers can show it to the user.
pub fn load_csv(path: &Path) -> ChartResult<Dataset> {
    if !path.is_file() {
        return Err(ChartError::FileNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    let dataset = Dataset::from_reader(file)?;
    debug!(
        "Loaded dataset {} with {} rows",
        path.display(),
        dataset.len()
    );
    Ok(dataset)
}

/// Numeric coercion used by every view: trimmed, finite `f64` or nothing.
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

impl Dataset {
    pub fn from_reader<R: Read>(reader: R) -> ChartResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let rows = csv_reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    pub fn column_index(&self, name: &str) -> ChartResult<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| ChartError::MissingColumn(name.to_string()))
    }

    /// Raw cells of a column; short rows yield `None`.
    pub fn column(&self, name: &str) -> ChartResult<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row.get(idx)).collect())
    }

    /// Coerced values of one column, skipping cells that are not numeric.
    pub fn numeric_column(&self, name: &str) -> ChartResult<Vec<f64>> {
        Ok(self
            .column(name)?
            .into_iter()
            .filter_map(|cell| cell.and_then(coerce_numeric))
            .collect())
    }

    /// Coerced `(x, y)` pairs, keeping only rows where both cells are numeric.
    pub fn numeric_pairs(&self, x: &str, y: &str) -> ChartResult<Vec<(f64, f64)>> {
        let xs = self.column(x)?;
        let ys = self.column(y)?;

        Ok(xs
            .into_iter()
            .zip(ys)
            .filter_map(|(x, y)| {
                let x = x.and_then(coerce_numeric)?;
                let y = y.and_then(coerce_numeric)?;
                Some((x, y))
            })
            .collect())
    }

    /// Occurrences of each distinct value, most frequent first. Missing
    /// markers are skipped; whitespace-only cells count as values.
    /// Equal counts keep the order in which the values first appear.
    pub fn value_counts(&self, name: &str) -> ChartResult<IndexMap<String, usize>> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for cell in self.column(name)?.into_iter().flatten() {
            if is_missing_marker(cell) {
                continue;
            }
            *counts.entry(cell.to_string()).or_insert(0) += 1;
        }

        // stable sort keeps first-appearance order for ties
        counts.sort_by(|_, a, _, b| b.cmp(a));
        Ok(counts)
    }
}
