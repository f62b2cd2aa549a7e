//! Terminal progress for generation attempts

use crate::algorithm::executor::GenerationEvent;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking resolved cells of the current attempt
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a bar for a map of `total_cells` cells
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the bar from a generation event
    pub fn observe(&self, event: GenerationEvent) {
        match event {
            GenerationEvent::AttemptStarted {
                attempt,
                total_cells,
            } => {
                self.bar.set_length(total_cells as u64);
                self.bar.set_position(0);
                self.bar.set_prefix(format!("attempt {attempt}"));
            }
            GenerationEvent::CellResolved { resolved, .. } => {
                self.bar.set_position(resolved as u64);
            }
            GenerationEvent::AttemptFailed { attempt, cell } => {
                self.bar.set_message(format!(
                    "(attempt {attempt} stalled at {}, {})",
                    cell[0], cell[1]
                ));
            }
        }
    }

    /// Cells resolved in the current attempt
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
