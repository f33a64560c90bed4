//! Progress bars for generation runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use trivia_application::ProgressNotifier;
use trivia_domain::Phase;

const BAR_TEMPLATE: &str =
    "{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Bar and running tally for the phase in progress
struct PhaseBar {
    bar: ProgressBar,
    succeeded: usize,
    failed: usize,
}

impl PhaseBar {
    fn tally(&self) -> String {
        if self.failed == 0 {
            format!("{} ok", self.succeeded)
        } else {
            format!("{} ok, {}", self.succeeded, format!("{} failed", self.failed).red())
        }
    }
}

/// One progress bar per pipeline phase, with a success/failure tally
pub struct ProgressReporter {
    multi: MultiProgress,
    current: Mutex<Option<PhaseBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            current: Mutex::new(None),
        }
    }

    fn label(phase: Phase) -> &'static str {
        match phase {
            Phase::Generation => "Generating",
            Phase::Delivery => "Delivering",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: Phase, total_tasks: usize) {
        let bar = self.multi.add(ProgressBar::new(total_tasks as u64));
        bar.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        bar.set_prefix(Self::label(phase));

        if let Ok(mut current) = self.current.lock() {
            *current = Some(PhaseBar {
                bar,
                succeeded: 0,
                failed: 0,
            });
        }
    }

    fn on_task_complete(&self, _phase: Phase, sequence_index: usize, success: bool) {
        if let Ok(mut current) = self.current.lock()
            && let Some(phase_bar) = current.as_mut()
        {
            if success {
                phase_bar.succeeded += 1;
            } else {
                phase_bar.failed += 1;
            }
            phase_bar
                .bar
                .set_message(format!("{} (last: #{})", phase_bar.tally(), sequence_index));
            phase_bar.bar.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: Phase) {
        if let Ok(mut current) = self.current.lock()
            && let Some(phase_bar) = current.take()
        {
            let summary = format!("{} done: {}", phase.display_name(), phase_bar.tally());
            phase_bar.bar.finish_with_message(summary.green().to_string());
        }
    }
}
