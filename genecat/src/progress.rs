use std::fmt::Debug;
use std::time::Instant;

use derive_more::{Add, AddAssign};
use number_prefix::NumberPrefix;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Add, AddAssign)]
#[repr(transparent)]
pub struct ByteNum(usize);

impl ByteNum {
    pub const ZERO: ByteNum = ByteNum(0);

    #[inline]
    #[must_use]
    pub const fn new(bytes: usize) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }
}

pub trait ProgressNotifier: Debug + Send + Sync {
    fn processed_bytes(&self, bytes: ByteNum);

    fn inc_iter(&self);
}

impl<T: ProgressNotifier> ProgressNotifier for &T {
    fn processed_bytes(&self, bytes: ByteNum) {
        T::processed_bytes(self, bytes)
    }

    fn inc_iter(&self) {
        T::inc_iter(self)
    }
}

/// Progress notifier that ignores all the notifications.
#[derive(Clone, Debug)]
pub struct DummyProgressNotifier;

impl ProgressNotifier for DummyProgressNotifier {
    fn processed_bytes(&self, _bytes: ByteNum) {
        // do nothing
    }

    fn inc_iter(&self) {
        // do nothing
    }
}

/// Formats the amount of processed data along with the time elapsed since
/// `start_time` and the resulting throughput, e.g. `1.20 MB in 0.50s (2.400
/// MB/s)`.
#[must_use]
pub fn format_stats(start_time: Instant, bytes_processed: ByteNum) -> String {
    let elapsed = start_time.elapsed();

    let size_human = format_bytes(bytes_processed);

    let rate = bytes_processed.get() as f32 / elapsed.as_secs_f32().max(f32::EPSILON);
    let rate_human = match NumberPrefix::decimal(rate) {
        NumberPrefix::Standalone(bytes) => {
            format!("{:.0} B/s", bytes)
        }
        NumberPrefix::Prefixed(prefix, n) => {
            format!("{:.3} {}B/s", n, prefix)
        }
    };

    format!(
        "{} in {:.2}s ({})",
        size_human,
        elapsed.as_secs_f32(),
        rate_human,
    )
}

#[must_use]
pub fn format_bytes(bytes: ByteNum) -> String {
    match NumberPrefix::decimal(bytes.get() as f32) {
        NumberPrefix::Standalone(bytes) => {
            format!("{} bytes", bytes)
        }
        NumberPrefix::Prefixed(prefix, n) => {
            format!("{:.2} {}B", n, prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::progress::{
        format_bytes, format_stats, ByteNum, DummyProgressNotifier, ProgressNotifier,
    };

    #[test]
    fn test_dummy_progress_notifier() {
        let notifier = DummyProgressNotifier;
        notifier.processed_bytes(ByteNum::new(1337));
        notifier.inc_iter();
        let notifier_2 = &notifier;
        notifier_2.processed_bytes(ByteNum::new(666));
    }

    #[test]
    fn test_byte_num_add() {
        let mut bytes = ByteNum::ZERO + ByteNum::new(5);
        bytes += ByteNum::new(10);

        assert_eq!(bytes.get(), 15);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(ByteNum::new(512)), "512 bytes");
        assert_eq!(format_bytes(ByteNum::new(1_500)), "1.50 kB");
        assert_eq!(format_bytes(ByteNum::new(2_000_000)), "2.00 MB");
    }

    #[test]
    fn test_format_stats_contains_size() {
        let stats = format_stats(Instant::now(), ByteNum::new(2_000_000));

        assert!(stats.starts_with("2.00 MB in "), "unexpected: {}", stats);
        assert!(stats.ends_with("B/s)"), "unexpected: {}", stats);
    }
}
