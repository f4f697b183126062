//! Progress reporting and cancellation hooks for the table processor.

use std::ops::ControlFlow;

/// Coarse processing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolving input headers to attributes.
    ResolveColumns,
    /// Coding rows.
    CodeRows,
    /// Appending derived columns to the frame.
    AppendColumns,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::ResolveColumns => "Resolving columns",
            Stage::CodeRows => "Coding rows",
            Stage::AppendColumns => "Appending columns",
        }
    }
}

/// Event delivered to a [`ProgressObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Stage(Stage),
    Row { completed: usize, total: usize },
    Finished { rows: usize },
}

/// Receives progress events; returning `Break` cancels the run at the next
/// row boundary.
pub trait ProgressObserver {
    fn on_event(&mut self, event: &ProgressEvent) -> ControlFlow<()>;
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressEvent) -> ControlFlow<()>,
{
    fn on_event(&mut self, event: &ProgressEvent) -> ControlFlow<()> {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_event(&mut self, _event: &ProgressEvent) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
