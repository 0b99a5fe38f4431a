use indicatif::{ProgressBar, ProgressStyle};
use scrivener_interface::{ProgressReporter, ProgressUpdate, RunState};

/// Terminal progress bar fed by pipeline updates.
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    /// Creates a bar running from 0 to 100.
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

impl Default for BarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for BarReporter {
    fn report(&mut self, update: &ProgressUpdate) {
        self.bar.set_position(u64::from(*update.percent()));
        match update.state() {
            RunState::Done => self.bar.finish_and_clear(),
            RunState::Failed => self.bar.abandon_with_message(update.label().clone()),
            _ => self.bar.set_message(update.label().clone()),
        }
    }
}
