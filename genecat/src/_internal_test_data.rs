use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;

use crate::progress::{ByteNum, ProgressNotifier};
use crate::sequence::SequenceRecord;

pub const SIMPLE_FASTA_STR: &str = ">A
ACGTACGTAC
>B
ACGTACGTACGTACGTACGT
";

lazy_static! {
    pub static ref SIMPLE_RECORDS: Vec<SequenceRecord> =
        vec![SequenceRecord::new("A", 10), SequenceRecord::new("B", 20)];
}

pub const MULTILINE_FASTA_STR: &str = ">gene_00001 partial=00 start_type=ATG
ATGAAAGCAATTTTCGTACTGAAAGGTTGGTGGCGCACTTCCTGA
AACGGGCAGGTGCACTTTGTGA
>gene_00002 partial=10
MKKLLPTAAAGLLLLAAQPAMA
MDIGINSD
>gene_00003
ATG
";

lazy_static! {
    pub static ref MULTILINE_RECORDS: Vec<SequenceRecord> = vec![
        SequenceRecord::with_size(
            "gene_00001",
            "partial=00 start_type=ATG",
            67,
            ByteNum::ZERO
        ),
        SequenceRecord::with_size("gene_00002", "partial=10", 30, ByteNum::ZERO),
        SequenceRecord::new("gene_00003", 3),
    ];
}

/// Catalog statistics table with the three count columns in positions 4-6.
pub const SIMPLE_CATALOG_TSV_STR: &str = "gene\tlength\tcontig\tmouse_a\tmouse_b\tmouse_c
g1\t900\tc1\t0\t0\t0
g2\t1200\tc2\t0\t1\t0
g3\t300\tc3\t1\t1\t1
";

pub const FLOAT_CATALOG_TSV_STR: &str = "id\tlen\tgc\tcov_1\tcov_2\tcov_3\textra
g1\t900\t0.41\t0.0\t-0\t2.5\tx
g2\t1200\t0.52\t\t0e0\tNaN\ty
g3\t300\t0.38\t0.000\t0.25\t0\tz
g4\t450\t0.50\tNA\t3\t0.0\tw
";

/// Progress notifier that counts the notifications it receives.
#[derive(Debug, Default)]
pub struct CountingProgressNotifier {
    bytes: AtomicUsize,
    iterations: AtomicUsize,
}

impl CountingProgressNotifier {
    #[must_use]
    pub fn bytes(&self) -> usize {
        self.bytes.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations.load(Ordering::Relaxed)
    }
}

impl ProgressNotifier for CountingProgressNotifier {
    fn processed_bytes(&self, bytes: ByteNum) {
        self.bytes.fetch_add(bytes.get(), Ordering::Relaxed);
    }

    fn inc_iter(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }
}
