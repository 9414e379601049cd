use std::collections::HashMap;
use std::io::BufRead;
use std::time::Instant;

use itertools::{Itertools, MinMaxResult};
use log::{debug, info};
use serde::Serialize;

use crate::fasta::reader::{FastaReader, FastaResult};
use crate::progress::{format_stats, ByteNum, ProgressNotifier};
use crate::sequence::{SequenceIdentifier, SequenceRecord};

/// Sequence lengths keyed by record identifier, in file order.
///
/// An identifier that occurs more than once keeps its first position and
/// takes the length of its last occurrence. The statistics cover every
/// record, repeated identifiers included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneLengths {
    entries: Vec<(SequenceIdentifier, usize)>,
    positions: HashMap<SequenceIdentifier, usize>,
    lengths: Vec<usize>,
}

impl GeneLengths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the length table out of already parsed records.
    ///
    /// # Examples
    /// ```
    /// use genecat::length_stats::GeneLengths;
    /// use genecat::sequence::SequenceRecord;
    ///
    /// let lengths = GeneLengths::from_records(&[
    ///     SequenceRecord::new("A", 10),
    ///     SequenceRecord::new("B", 20),
    /// ]);
    /// assert_eq!(lengths.len(), 2);
    /// assert_eq!(lengths.statistics().mean, 15.0);
    /// ```
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SequenceRecord>,
    {
        let mut gene_lengths = Self::new();
        for record in records {
            gene_lengths.push(record);
        }
        gene_lengths
    }

    pub fn push(&mut self, record: &SequenceRecord) {
        let length = record.len();
        match self.positions.get(record.identifier()) {
            Some(&position) => self.entries[position].1 = length,
            None => {
                let identifier = record.identifier().clone();
                self.positions.insert(identifier.clone(), self.entries.len());
                self.entries.push((identifier, length));
            }
        }
        self.lengths.push(length);
    }

    /// Returns the number of records, repeated identifiers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Returns the number of distinct identifiers.
    #[must_use]
    pub fn identifier_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the lengths of all the records in file order.
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Iterates over `(identifier, length)` pairs in order of the first
    /// occurrence of each identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&SequenceIdentifier, usize)> + '_ {
        self.entries
            .iter()
            .map(|(identifier, length)| (identifier, *length))
    }

    #[must_use]
    pub fn statistics(&self) -> LengthStatistics {
        LengthStatistics::from_lengths(&self.lengths)
    }
}

/// Aggregate statistics over a set of sequence lengths.
///
/// All the values are zero for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthStatistics {
    pub count: usize,
    pub mean: f64,
    pub min: usize,
    pub max: usize,
    /// `(mean - min) / mean * 100`, or 0 when the mean is 0.
    pub min_percent_below_mean: f64,
    /// `(max - mean) / mean * 100`, or 0 when the mean is 0.
    pub max_percent_above_mean: f64,
}

impl LengthStatistics {
    pub const ZERO: LengthStatistics = LengthStatistics {
        count: 0,
        mean: 0.0,
        min: 0,
        max: 0,
        min_percent_below_mean: 0.0,
        max_percent_above_mean: 0.0,
    };

    /// Computes the statistics of given lengths.
    ///
    /// # Examples
    /// ```
    /// use genecat::length_stats::LengthStatistics;
    ///
    /// let stats = LengthStatistics::from_lengths(&[10, 20]);
    /// assert_eq!(stats.min, 10);
    /// assert_eq!(stats.max, 20);
    /// assert_eq!(format!("{:.2}", stats.max_percent_above_mean), "33.33");
    ///
    /// assert_eq!(LengthStatistics::from_lengths(&[]), LengthStatistics::ZERO);
    /// ```
    #[must_use]
    pub fn from_lengths(lengths: &[usize]) -> Self {
        let (min, max) = match lengths.iter().copied().minmax() {
            MinMaxResult::NoElements => return Self::ZERO,
            MinMaxResult::OneElement(length) => (length, length),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let total: u64 = lengths.iter().map(|&length| length as u64).sum();
        let mean = total as f64 / lengths.len() as f64;

        let (min_percent_below_mean, max_percent_above_mean) = if mean > 0.0 {
            (
                (mean - min as f64) / mean * 100.0,
                (max as f64 - mean) / mean * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            count: lengths.len(),
            mean,
            min,
            max,
            min_percent_below_mean,
            max_percent_above_mean,
        }
    }
}

/// Reads all the records of a FASTA file and collects their lengths.
///
/// Parsing stops at the first malformed record and the error is returned.
pub fn gene_lengths<R: BufRead, P: ProgressNotifier>(
    reader: R,
    progress_notifier: P,
) -> FastaResult<GeneLengths> {
    let start_time = Instant::now();
    let mut processed = ByteNum::ZERO;
    let mut gene_lengths = GeneLengths::new();

    for record in FastaReader::new(reader) {
        let record = record?;
        debug!("Record `{}`: length {}", record.identifier(), record.len());

        gene_lengths.push(&record);
        progress_notifier.processed_bytes(record.size());
        processed += record.size();
    }

    info!(
        "Read {} records: {}",
        gene_lengths.len(),
        format_stats(start_time, processed)
    );

    Ok(gene_lengths)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::_internal_test_data::{MULTILINE_FASTA_STR, SIMPLE_FASTA_STR};
    use crate::fasta::reader::FastaReaderError;
    use crate::length_stats::{gene_lengths, GeneLengths, LengthStatistics};
    use crate::progress::DummyProgressNotifier;
    use crate::sequence::SequenceRecord;

    #[test]
    fn test_statistics_two_records() {
        let stats = LengthStatistics::from_lengths(&[10, 20]);

        assert_eq!(stats.count, 2);
        assert_relative_eq!(stats.mean, 15.0);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 20);
        assert_relative_eq!(stats.min_percent_below_mean, 100.0 / 3.0);
        assert_relative_eq!(stats.max_percent_above_mean, 100.0 / 3.0);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = LengthStatistics::from_lengths(&[]);

        assert_eq!(stats, LengthStatistics::ZERO);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.min_percent_below_mean, 0.0);
        assert_eq!(stats.max_percent_above_mean, 0.0);
    }

    #[test]
    fn test_statistics_single_record() {
        let stats = LengthStatistics::from_lengths(&[42]);

        assert_relative_eq!(stats.mean, 42.0);
        assert_eq!((stats.min, stats.max), (42, 42));
        assert_eq!(stats.min_percent_below_mean, 0.0);
        assert_eq!(stats.max_percent_above_mean, 0.0);
    }

    #[test]
    fn test_statistics_zero_length_records() {
        let stats = LengthStatistics::from_lengths(&[0, 0, 0]);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.min_percent_below_mean, 0.0);
        assert_eq!(stats.max_percent_above_mean, 0.0);
    }

    #[test]
    fn test_statistics_match_definitions() {
        let lengths = [300, 1200, 450, 451, 999, 3];
        let stats = LengthStatistics::from_lengths(&lengths);

        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        assert_relative_eq!(stats.mean, mean);
        assert_eq!(stats.min, 3);
        assert_eq!(stats.max, 1200);
        assert_relative_eq!(stats.min_percent_below_mean, (mean - 3.0) / mean * 100.0);
        assert_relative_eq!(stats.max_percent_above_mean, (1200.0 - mean) / mean * 100.0);
    }

    #[test]
    fn test_gene_lengths_keeps_file_order() {
        let lengths = gene_lengths(MULTILINE_FASTA_STR.as_bytes(), DummyProgressNotifier).unwrap();
        let entries: Vec<_> = lengths
            .iter()
            .map(|(identifier, length)| (identifier.str().to_owned(), length))
            .collect();

        assert_eq!(
            entries,
            vec![
                ("gene_00001".to_owned(), 67),
                ("gene_00002".to_owned(), 30),
                ("gene_00003".to_owned(), 3),
            ]
        );
    }

    #[test]
    fn test_gene_lengths_repeated_identifier() {
        let data = ">a\nAC\n>b\nACG\n>a\nACGT\n";
        let lengths = gene_lengths(data.as_bytes(), DummyProgressNotifier).unwrap();
        let entries: Vec<_> = lengths
            .iter()
            .map(|(identifier, length)| (identifier.str().to_owned(), length))
            .collect();

        assert_eq!(entries, vec![("a".to_owned(), 4), ("b".to_owned(), 3)]);
        assert_eq!(lengths.len(), 3);
        assert_eq!(lengths.identifier_count(), 2);
        assert_eq!(lengths.lengths(), &[2, 3, 4]);

        let stats = lengths.statistics();
        assert_eq!(stats.count, 3);
        assert_relative_eq!(stats.mean, 3.0);
        assert_eq!((stats.min, stats.max), (2, 4));
    }

    #[test]
    fn test_gene_lengths_simple() {
        let lengths = gene_lengths(SIMPLE_FASTA_STR.as_bytes(), DummyProgressNotifier).unwrap();

        assert_eq!(
            lengths,
            GeneLengths::from_records(&[SequenceRecord::new("A", 10), SequenceRecord::new("B", 20)])
        );
    }

    #[test]
    fn test_gene_lengths_empty_input() {
        let lengths = gene_lengths("".as_bytes(), DummyProgressNotifier).unwrap();

        assert!(lengths.is_empty());
        assert_eq!(lengths.statistics(), LengthStatistics::ZERO);
    }

    #[test]
    fn test_gene_lengths_propagates_parse_error() {
        let error = gene_lengths(&b">a\nAC\n>\xff\nAC\n"[..], DummyProgressNotifier).unwrap_err();

        assert!(matches!(error, FastaReaderError::InvalidTitle(3)));
    }
}
