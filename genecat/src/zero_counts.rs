use std::io::Read;

use log::info;
use serde::Serialize;

use crate::catalog::{CatalogResult, CatalogRow, CatalogTable};
use crate::progress::ProgressNotifier;

/// Counts of zero values across the three selected catalog columns
/// (referred to as columns 4, 5 and 6, after their 1-based positions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ZeroCountSummary {
    /// Header names of columns 4, 5 and 6.
    #[serde(skip)]
    pub column_names: [String; 3],
    pub rows: u64,
    pub col4_zeros: u64,
    pub col5_zeros: u64,
    pub col6_zeros: u64,
    pub all_three_zeros: u64,
    pub col4_and_col5_zeros: u64,
    /// Column 4 is zero while column 5 is not.
    pub col4_only_zeros: u64,
    /// Column 5 is zero while column 4 is not.
    pub col5_only_zeros: u64,
}

impl ZeroCountSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts zeros in all the rows of given table.
    #[must_use]
    pub fn from_table(table: &CatalogTable) -> Self {
        let mut summary = Self::from_rows(table.rows());
        summary.column_names = table.column_names().clone();
        summary
    }

    /// Counts zeros in given rows.
    ///
    /// # Examples
    /// ```
    /// use genecat::catalog::CatalogRow;
    /// use genecat::zero_counts::ZeroCountSummary;
    ///
    /// let summary = ZeroCountSummary::from_rows(&[
    ///     CatalogRow::new(2, [0.0, 0.0, 0.0]),
    ///     CatalogRow::new(3, [0.0, 1.0, 0.0]),
    ///     CatalogRow::new(4, [1.0, 1.0, 1.0]),
    /// ]);
    /// assert_eq!(summary.col4_zeros, 2);
    /// assert_eq!(summary.all_three_zeros, 1);
    /// assert_eq!(summary.col5_only_zeros, 0);
    /// ```
    #[must_use]
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a CatalogRow>,
    {
        let mut summary = Self::new();
        for row in rows {
            summary.add_row(row);
        }
        summary
    }

    pub fn add_row(&mut self, row: &CatalogRow) {
        let col4 = row.is_zero(0);
        let col5 = row.is_zero(1);
        let col6 = row.is_zero(2);

        self.rows += 1;
        self.col4_zeros += u64::from(col4);
        self.col5_zeros += u64::from(col5);
        self.col6_zeros += u64::from(col6);
        self.all_three_zeros += u64::from(col4 && col5 && col6);
        self.col4_and_col5_zeros += u64::from(col4 && col5);
        self.col4_only_zeros += u64::from(col4 && !col5);
        self.col5_only_zeros += u64::from(col5 && !col4);
    }
}

/// Reads a catalog statistics table and counts zeros in its 4th, 5th and 6th
/// columns.
pub fn zero_counts<R: Read, P: ProgressNotifier>(
    reader: R,
    progress_notifier: P,
) -> CatalogResult<ZeroCountSummary> {
    let table = CatalogTable::from_reader_with_progress(reader, progress_notifier)?;
    info!(
        "Read {} rows; counting zeros in columns: {}",
        table.rows().len(),
        table.column_names().join(", ")
    );

    Ok(ZeroCountSummary::from_table(&table))
}
