use tracing::trace;

use crate::observer::{RowRange, TreeObserver};
use crate::tree::NodeId;

/// Observer that reports every notification as a `trace` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl TreeObserver for LoggingObserver {
    fn rows_about_to_be_inserted(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        trace!("Inserting rows {}", RowRange::new(parent, first, last));
    }

    fn rows_inserted(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        trace!("Inserted rows {}", RowRange::new(parent, first, last));
    }

    fn rows_about_to_be_removed(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        trace!("Removing rows {}", RowRange::new(parent, first, last));
    }

    fn rows_removed(&mut self, parent: Option<NodeId>, first: usize, last: usize) {
        trace!("Removed rows {}", RowRange::new(parent, first, last));
    }
}
