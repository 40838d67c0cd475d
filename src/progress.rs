//! Progress bar display for packaging

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for writing artifacts into an archive
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress display over `total` steps
    ///
    /// The bar is hidden when stderr is not a terminal.
    pub fn new(total: u64) -> Self {
        if !Term::stderr().is_term() {
            return Self::hidden();
        }

        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total);
        bar.set_style(style);
        Self { bar }
    }

    /// A display that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the item currently being written
    pub fn update(&self, label: &str) {
        let display = if label.chars().count() > 50 {
            let tail: String = label
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            label.to_string()
        };
        self.bar.set_message(display);
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
