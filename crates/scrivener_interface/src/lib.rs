//! Trait definitions for the Scrivener article generator.
//!
//! Two seams separate the pipeline from its surroundings: the provider
//! behind [`GenerationDriver`] and the host behind [`ProgressReporter`].

mod driver;
mod progress;

pub use driver::GenerationDriver;
pub use progress::{ProgressReporter, ProgressUpdate, RecordingReporter, RunState, TracingReporter};
