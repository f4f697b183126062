//! Terminal progress bar driven by processing events.

use std::io::{self, IsTerminal};
use std::ops::ControlFlow;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use pin_transform::{ProgressEvent, ProgressObserver};

const TEMPLATE: &str = "{msg:<18} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows";

/// Progress bar on stderr; hidden when disabled or stderr is not a terminal.
pub struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    pub fn new(enabled: bool) -> Self {
        let bar = ProgressBar::new(0);
        if !enabled || !io::stderr().is_terminal() {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        let style = ProgressStyle::with_template(TEMPLATE)
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressObserver for BarObserver {
    fn on_event(&mut self, event: &ProgressEvent) -> ControlFlow<()> {
        match *event {
            ProgressEvent::Stage(stage) => self.bar.set_message(stage.label()),
            ProgressEvent::Row { completed, total } => {
                self.bar.set_length(total as u64);
                self.bar.set_position(completed as u64);
            }
            ProgressEvent::Finished { .. } => self.bar.finish_and_clear(),
        }
        ControlFlow::Continue(())
    }
}

impl Drop for BarObserver {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
