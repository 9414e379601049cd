//! Gene catalog statistics table (TSV with a header row).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use crate::progress::{DummyProgressNotifier, ProgressNotifier};

/// File name of the clustered catalog statistics table produced by the
/// catalog construction pipeline.
pub const DEFAULT_CATALOG_STATS_FILE: &str = "clustered2_mice_gut_catalog_stats.tsv";

/// 0-based positions of the columns taken into account (4th, 5th and 6th).
pub const SELECTED_COLUMNS: [usize; 3] = [3, 4, 5];

/// Cell values that denote a missing value rather than a number.
const MISSING_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Error occurring during reading a catalog statistics table.
#[derive(Debug)]
pub enum CatalogTableError {
    /// I/O or TSV syntax error.
    CsvError(csv::Error),
    /// The header has fewer columns than needed; contains the actual number.
    TooFewColumns(usize),
    /// A row has more cells than the header.
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
    /// A selected cell is neither a number nor a missing value.
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
}

impl From<csv::Error> for CatalogTableError {
    fn from(e: csv::Error) -> Self {
        Self::CsvError(e)
    }
}

impl Display for CatalogTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogTableError::CsvError(e) => write!(f, "TSV error: {}", e),
            CatalogTableError::TooFewColumns(num) => write!(
                f,
                "Expected at least {} columns, found {}",
                SELECTED_COLUMNS[2] + 1,
                num
            ),
            CatalogTableError::TooManyFields {
                line,
                expected,
                found,
            } => write!(
                f,
                "Expected {} fields at line {}, found {}",
                expected, line, found
            ),
            CatalogTableError::InvalidNumber {
                line,
                column,
                value,
            } => write!(
                f,
                "Invalid number `{}` in column `{}` at line {}",
                value, column, line
            ),
        }
    }
}

impl Error for CatalogTableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogTableError::CsvError(e) => Some(e),
            _ => None,
        }
    }
}

/// The result of a catalog table reading operation.
pub type CatalogResult<T> = Result<T, CatalogTableError>;

/// Values of the selected columns in a single table row. Missing values are
/// represented as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogRow {
    /// 1-based line number in the input file.
    pub line: u64,
    pub values: [f64; 3],
}

impl CatalogRow {
    #[must_use]
    pub fn new(line: u64, values: [f64; 3]) -> Self {
        Self { line, values }
    }

    /// Returns whether the value in the selected column `index` (0..3) equals
    /// zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self, index: usize) -> bool {
        self.values[index] == 0.0
    }
}

/// Catalog statistics table reduced to the selected columns, kept in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTable {
    column_names: [String; 3],
    rows: Vec<CatalogRow>,
}

impl CatalogTable {
    /// Reads the whole table from a tab-separated input with a header row.
    ///
    /// Rows shorter than the header are padded with missing values.
    ///
    /// # Examples
    /// ```
    /// use genecat::catalog::CatalogTable;
    ///
    /// let data = "id\ta\tb\tx\ty\tz\ng1\t1\t2\t0\t0\t5\n";
    /// let table = CatalogTable::from_reader(data.as_bytes()).unwrap();
    /// assert_eq!(table.column_names(), &["x", "y", "z"]);
    /// assert_eq!(table.rows().len(), 1);
    /// assert!(table.rows()[0].is_zero(0));
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        Self::from_reader_with_progress(reader, DummyProgressNotifier)
    }

    /// Reads the whole table like [`CatalogTable::from_reader`], notifying
    /// about every row read.
    pub fn from_reader_with_progress<R: Read, P: ProgressNotifier>(
        reader: R,
        progress_notifier: P,
    ) -> CatalogResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?;
        if headers.len() <= SELECTED_COLUMNS[2] {
            return Err(CatalogTableError::TooFewColumns(headers.len()));
        }
        let field_count = headers.len();
        let column_names = SELECTED_COLUMNS.map(|index| headers[index].to_owned());
        debug!("Selected columns: {}", column_names.join(", "));

        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            let line = record.position().map_or(0, |position| position.line());
            if record.len() > field_count {
                return Err(CatalogTableError::TooManyFields {
                    line,
                    expected: field_count,
                    found: record.len(),
                });
            }

            let mut values = [0.0; 3];
            for (value, (&index, name)) in values
                .iter_mut()
                .zip(SELECTED_COLUMNS.iter().zip(column_names.iter()))
            {
                let cell = record.get(index).unwrap_or("");
                *value = parse_value(cell).ok_or_else(|| CatalogTableError::InvalidNumber {
                    line,
                    column: name.clone(),
                    value: cell.to_owned(),
                })?;
            }

            rows.push(CatalogRow::new(line, values));
            progress_notifier.inc_iter();
        }

        Ok(Self { column_names, rows })
    }

    /// Returns the header names of the selected columns.
    #[must_use]
    pub fn column_names(&self) -> &[String; 3] {
        &self.column_names
    }

    #[must_use]
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }
}

fn parse_value(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if MISSING_VALUES.contains(&cell) {
        return Some(f64::NAN);
    }

    cell.parse().ok()
}
