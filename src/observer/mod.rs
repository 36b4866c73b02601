//! Structural change notifications.
//!
//! Every mutation of a [`PathTree`](crate::PathTree) is bracketed by an
//! "about to" and a "done" call on its observer. Rows are addressed the way a
//! list or table view sees them: a presentation parent (`None` for the top
//! level) and an inclusive row range among that parent's children.

mod logging_observer;
mod recording_observer;

pub use logging_observer::LoggingObserver;
pub use recording_observer::{RecordingObserver, RowRange, TreeEvent};

use crate::tree::NodeId;

pub trait TreeObserver {
    fn rows_about_to_be_inserted(&mut self, _parent: Option<NodeId>, _first: usize, _last: usize) {}

    fn rows_inserted(&mut self, _parent: Option<NodeId>, _first: usize, _last: usize) {}

    fn rows_about_to_be_removed(&mut self, _parent: Option<NodeId>, _first: usize, _last: usize) {}

    fn rows_removed(&mut self, _parent: Option<NodeId>, _first: usize, _last: usize) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TreeObserver for NullObserver {}
