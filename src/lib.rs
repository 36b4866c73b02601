//! A sorted in-memory tree of file paths that re-roots itself as paths
//! arrive, with a flat scratch subtree and a parent/row projection for list
//! and table views.

#![allow(clippy::enum_variant_names)]

pub mod collation;
pub mod config;
pub mod ext;
pub mod observer;
pub mod path;
pub mod tree;

pub use collation::{BinaryCollator, Collator, NaturalCollator};
pub use config::{CollationConfig, ConfigError, TreeConfig};
pub use observer::{LoggingObserver, NullObserver, RecordingObserver, TreeObserver};
pub use path::{DirPath, FilePath, PathError};
pub use tree::{NodeId, PathTree, RemovedNode, TreeError};
