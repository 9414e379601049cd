use std::io::Write;

use approx::assert_relative_eq;
use flate2::write::GzEncoder;
use flate2::Compression;
use genecat::_internal_test_data::{MULTILINE_FASTA_STR, SIMPLE_CATALOG_TSV_STR, SIMPLE_FASTA_STR};
use genecat::io::decompressing_reader;
use genecat::length_stats::{gene_lengths, LengthStatistics};
use genecat::progress::DummyProgressNotifier;
use genecat::zero_counts::zero_counts;

fn gzip(data: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[test_log::test]
fn test_gene_length_statistics() {
    let (_, reader) = decompressing_reader(SIMPLE_FASTA_STR.as_bytes()).unwrap();
    let lengths = gene_lengths(reader, DummyProgressNotifier).unwrap();
    let stats = lengths.statistics();

    assert_eq!(stats.count, 2);
    assert_relative_eq!(stats.mean, 15.0);
    assert_eq!(stats.min, 10);
    assert_eq!(stats.max, 20);
    assert_eq!(format!("{:.2}", stats.min_percent_below_mean), "33.33");
    assert_eq!(format!("{:.2}", stats.max_percent_above_mean), "33.33");
}

#[test_log::test]
fn test_gene_length_statistics_gzip() {
    let compressed = gzip(MULTILINE_FASTA_STR);
    let (_, reader) = decompressing_reader(compressed.as_slice()).unwrap();
    let lengths = gene_lengths(reader, DummyProgressNotifier).unwrap();

    assert_eq!(lengths.lengths(), &[67, 30, 3]);
    assert_relative_eq!(lengths.statistics().mean, 100.0 / 3.0);
}

#[test_log::test]
fn test_gene_length_statistics_empty_file() {
    let (_, reader) = decompressing_reader("".as_bytes()).unwrap();
    let lengths = gene_lengths(reader, DummyProgressNotifier).unwrap();

    assert_eq!(lengths.statistics(), LengthStatistics::ZERO);
}

#[test_log::test]
fn test_zero_counts_gzip() {
    let compressed = gzip(SIMPLE_CATALOG_TSV_STR);
    let (_, reader) = decompressing_reader(compressed.as_slice()).unwrap();
    let summary = zero_counts(reader, DummyProgressNotifier).unwrap();

    assert_eq!(
        [
            summary.col4_zeros,
            summary.col5_zeros,
            summary.col6_zeros,
            summary.all_three_zeros,
            summary.col4_and_col5_zeros,
            summary.col4_only_zeros,
            summary.col5_only_zeros,
        ],
        [2, 1, 2, 1, 1, 1, 0]
    );
}
