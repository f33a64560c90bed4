//! Progress notification port
//!
//! Defines the interface for reporting progress during a generation run.

use trivia_domain::Phase;

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: Phase, total_tasks: usize);

    /// Called when the task for `sequence_index` reaches a terminal outcome
    fn on_task_complete(&self, phase: Phase, sequence_index: usize, success: bool);

    /// Called when every task of a phase is terminal
    fn on_phase_complete(&self, phase: Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: Phase, _sequence_index: usize, _success: bool) {}
    fn on_phase_complete(&self, _phase: Phase) {}
}
