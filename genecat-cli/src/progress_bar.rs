use std::sync::{Arc, Mutex};
use std::time::Duration;

use genecat::progress::{ByteNum, ProgressNotifier};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressUnit {
    Bytes,
    Rows,
}

#[derive(Debug)]
struct CliProgressBarState {
    length: u64,
    unit: ProgressUnit,
    initialized: bool,
}

impl CliProgressBarState {
    fn new() -> Self {
        Self {
            length: 0,
            unit: ProgressUnit::Bytes,
            initialized: false,
        }
    }

    fn style(&self) -> ProgressStyle {
        let template = match (self.unit, self.length) {
            (ProgressUnit::Bytes, 0) => "{spinner} {bytes}/? ({bytes_per_sec}) {msg}",
            (ProgressUnit::Bytes, _) => "{wide_bar} {bytes}/{total_bytes} [ETA {eta}]",
            (ProgressUnit::Rows, _) => "{spinner} {pos} rows ({per_sec}) {msg}",
        };
        let style = if self.unit == ProgressUnit::Rows || self.length == 0 {
            ProgressStyle::default_spinner()
        } else {
            ProgressStyle::default_bar()
        };

        style
            .template(template)
            .expect("Invalid progress bar template")
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CliProgressBar {
    bar: ProgressBar,
    state: Arc<Mutex<CliProgressBarState>>,
}

impl CliProgressBar {
    pub fn new() -> CliProgressBar {
        let init_bar = ProgressBar::hidden();
        init_bar.set_style(ProgressStyle::default_spinner());
        init_bar.enable_steady_tick(Duration::from_millis(50));
        init_bar.set_message("Reading input...");

        Self {
            bar: init_bar,
            state: Arc::new(Mutex::new(CliProgressBarState::new())),
        }
    }

    pub fn show(&self) {
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear()
    }

    #[inline]
    fn init(&self) {
        let mut state = self.state.lock().unwrap();
        if state.initialized {
            return;
        }

        if state.length != 0 {
            self.bar.set_length(state.length);
        }
        self.bar.set_position(0);
        self.bar.set_style(state.style());
        state.initialized = true;
    }

    /// Switches to byte-based progress; `0` means the total is unknown.
    pub fn set_total_bytes(&self, length: u64) {
        self.reset(ProgressUnit::Bytes, length);
    }

    /// Switches to a row counter; the number of rows is never known upfront.
    pub fn set_rows(&self) {
        self.reset(ProgressUnit::Rows, 0);
    }

    fn reset(&self, unit: ProgressUnit, length: u64) {
        let mut state = self.state.lock().unwrap();

        state.initialized = false;
        state.unit = unit;
        state.length = length;
    }

    pub fn println<I: AsRef<str>>(&self, msg: I) {
        self.bar.println(msg);
    }
}

impl ProgressNotifier for CliProgressBar {
    fn processed_bytes(&self, bytes: ByteNum) {
        self.init();
        self.bar.inc(bytes.get() as u64);
    }

    fn inc_iter(&self) {
        self.init();
        self.bar.inc(1);
    }
}
