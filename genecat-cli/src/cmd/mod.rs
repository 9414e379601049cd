pub mod gene_lengths;
pub mod zero_counts;
