pub mod catalog;
pub mod fasta;
pub mod io;
pub mod length_stats;
pub mod progress;
pub mod sequence;
pub mod zero_counts;

#[doc(hidden)]
pub mod _internal_test_data;
