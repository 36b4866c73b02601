use std::fmt;

use derive_more::Display;

use crate::observer::TreeObserver;
use crate::tree::NodeId;

/// Inclusive range of rows below a presentation parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub parent: Option<NodeId>,
    pub first: usize,
    pub last: usize,
}

impl RowRange {
    pub fn new(parent: Option<NodeId>, first: usize, last: usize) -> Self {
        Self {
            parent,
            first,
            last,
        }
    }

    pub fn len(&self) -> usize {
        self.last + 1 - self.first
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent {
            Some(parent) => write!(f, "{}..={} under {}", self.first, self.last, parent),
            None => write!(f, "{}..={} at top level", self.first, self.last),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TreeEvent {
    #[display("rows about to be inserted: {_0}")]
    RowsAboutToBeInserted(RowRange),
    #[display("rows inserted: {_0}")]
    RowsInserted(RowRange),
    #[display("rows about to be removed: {_0}")]
    RowsAboutToBeRemoved(RowRange),
    #[display("rows removed: {_0}")]
    RowsRemoved(RowRange),
}

/// Observer that keeps every notification as a [`TreeEvent`].
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<TreeEvent>,
}

impl RecordingObserver {
    pub fn events(&self) -> &[TreeEvent] {
        &self.events
    }

    /// Returns the recorded events and starts a fresh log.
    pub fn take_events(&mut self) -> Vec<TreeEvent> {
        std::mem::take(&mut self.events)
    }

    /// True when every "about to" event is immediately followed by its
    /// matching "done" event with the same range.
    pub fn is_balanced(&self) -> bool {
        self.events.len() % 2 == 0
            && self.events.chunks(2).all(|pair| {
                matches!(
                    pair,
                    [TreeEvent::RowsAboutToBeInserted(a), TreeEvent::RowsInserted(b)]
                    | [TreeEvent::RowsAboutToBeRemoved(a), TreeEvent::RowsRemoved(b)]
                    if a == b
                )
            })
    }
}

impl TreeObserver for RecordingObserver {
    fn rows_about_to_be_inserted(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        self.events
            .push(TreeEvent::RowsAboutToBeInserted(RowRange::new(parent, first, last)));
    }

    fn rows_inserted(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        self.events
            .push(TreeEvent::RowsInserted(RowRange::new(parent, first, last)));
    }

    fn rows_about_to_be_removed(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        self.events
            .push(TreeEvent::RowsAboutToBeRemoved(RowRange::new(parent, first, last)));
    }

    fn rows_removed(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        self.events
            .push(TreeEvent::RowsRemoved(RowRange::new(parent, first, last)));
    }
}
