use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use genecat::catalog::DEFAULT_CATALOG_STATS_FILE;

use crate::opts::{input_stream, InputStream};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Don't display a progress bar/spinner
    #[clap(long, global = true, value_parser)]
    pub no_progress: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the length of every sequence in a FASTA file along with the
    /// mean, minimum and maximum length
    GeneLengths {
        /// Input FASTA file path (optionally gzipped); `-` is the standard
        /// input
        #[clap(value_parser = input_stream)]
        input: InputStream,

        /// Output only the summary statistics as a CSV file to the standard
        /// output
        #[clap(long, value_parser)]
        csv: bool,
    },

    /// Count zero values in the 4th, 5th and 6th column of a catalog
    /// statistics TSV file
    ZeroCounts {
        /// Input TSV file path (optionally gzipped); `-` is the standard input
        #[clap(default_value = DEFAULT_CATALOG_STATS_FILE, value_parser = input_stream)]
        input: InputStream,

        /// Output the counts as a CSV file to the standard output
        #[clap(long, value_parser)]
        csv: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use crate::cli::{Cli, Commands};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_gene_lengths() {
        let cli = Cli::try_parse_from(["genecat", "gene-lengths", "genes.fa"]).unwrap();

        match cli.command {
            Commands::GeneLengths { input, csv } => {
                assert_eq!(input.to_string(), "genes.fa");
                assert!(!csv);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn gene_lengths_requires_exactly_one_path() {
        assert!(Cli::try_parse_from(["genecat", "gene-lengths"]).is_err());
        assert!(Cli::try_parse_from(["genecat", "gene-lengths", "a.fa", "b.fa"]).is_err());
    }

    #[test]
    fn zero_counts_uses_default_path() {
        let args = ["genecat", "--no-progress", "zero-counts", "--csv"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.no_progress);
        match cli.command {
            Commands::ZeroCounts { input, csv } => {
                assert_eq!(input.to_string(), "clustered2_mice_gut_catalog_stats.tsv");
                assert!(csv);
            }
            _ => panic!("unexpected command"),
        }
    }
}
