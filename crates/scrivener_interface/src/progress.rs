//! Run states and progress reporting.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// State of an article run.
///
/// Transitions run strictly forward:
/// `Idle → OutlineRequested → OutlineParsed → SectionsInProgress → Assembled → Done`,
/// with `Failed` reachable only from `OutlineRequested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::AsRefStr)]
pub enum RunState {
    /// Nothing started, or inputs rejected.
    Idle,
    /// Outline call in flight.
    OutlineRequested,
    /// Outline parsed into sections.
    OutlineParsed,
    /// Generating section `current` of `total` (1-based).
    SectionsInProgress {
        /// Section being generated
        current: usize,
        /// Number of sections in the outline
        total: usize,
    },
    /// Article text assembled.
    Assembled,
    /// Article handed to the caller.
    Done,
    /// Outline stage failed; no article.
    Failed,
}

impl RunState {
    /// True for `Done` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Idle => write!(f, "Idle"),
            RunState::OutlineRequested => write!(f, "Step 1/4: generating outline"),
            RunState::OutlineParsed => write!(f, "Step 2/4: parsing outline"),
            RunState::SectionsInProgress { current, total } => {
                write!(f, "Step 3/4: generating section {}/{}", current, total)
            }
            RunState::Assembled => write!(f, "Step 4/4: assembling article"),
            RunState::Done => write!(f, "Article complete"),
            RunState::Failed => write!(f, "Generation failed"),
        }
    }
}

/// A progress notification for the host.
///
/// `percent` is for display only; `state` is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ProgressUpdate {
    /// Run state entered
    state: RunState,
    /// Display percentage, 0-100
    percent: u8,
    /// Human-readable stage label
    label: String,
}

impl ProgressUpdate {
    /// Creates an update labelled with the state's display text.
    pub fn new(state: RunState, percent: u8) -> Self {
        Self {
            state,
            percent: percent.min(100),
            label: state.to_string(),
        }
    }
}

/// Receives progress updates from a run.
pub trait ProgressReporter: Send {
    /// Called on every state transition.
    fn report(&mut self, update: &ProgressUpdate);
}

/// Reporter that logs through `tracing` and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn report(&mut self, update: &ProgressUpdate) {
        tracing::info!(
            state = update.state.as_ref(),
            percent = update.percent,
            "{}",
            update.label
        );
    }
}

/// Reporter that records every update, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    updates: Vec<ProgressUpdate>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates received so far.
    pub fn updates(&self) -> &[ProgressUpdate] {
        &self.updates
    }

    /// States received so far.
    pub fn states(&self) -> Vec<RunState> {
        self.updates.iter().map(|u| u.state).collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&mut self, update: &ProgressUpdate) {
        self.updates.push(update.clone());
    }
}

impl<F> ProgressReporter for F
where
    F: FnMut(&ProgressUpdate) + Send,
{
    fn report(&mut self, update: &ProgressUpdate) {
        self(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_clamped() {
        let update = ProgressUpdate::new(RunState::Done, 120);
        assert_eq!(*update.percent(), 100);
    }

    #[test]
    fn test_section_label_counts_from_one() {
        let update = ProgressUpdate::new(RunState::SectionsInProgress { current: 2, total: 3 }, 68);
        assert_eq!(update.label(), "Step 3/4: generating section 2/3");
    }

    #[test]
    fn test_closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut reporter = |u: &ProgressUpdate| seen.push(*u.state());
            reporter.report(&ProgressUpdate::new(RunState::Idle, 0));
        }
        assert_eq!(seen, vec![RunState::Idle]);
    }
}
