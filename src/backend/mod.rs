//! The seam between the panel and the backend that owns ERT state.
//!
//! Inbound, the backend pushes [`RemoteSnapshot`](crate::snapshot::RemoteSnapshot)s over a watch channel.
//! Outbound, the panel emits [`Action`]s through an injected [`ActionSink`].

pub mod action;
pub mod feed;
pub mod sink;

pub use action::{Action, ActionEnvelope, SlotRole};
pub use feed::{
    FileFeed, SnapshotPublisher, SnapshotReceiver, load_snapshot, snapshot_channel,
};
pub use sink::{ActionSink, JsonLinesSink, RecordingSink};
