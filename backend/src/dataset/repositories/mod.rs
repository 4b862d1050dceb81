//! Repository implementations:
//! - `snapshot`: load once at startup, share one immutable sequence
//! - `file`: re-read the source file on every call
pub mod file;
pub mod snapshot;

pub use file::FileRepository;
pub use snapshot::SnapshotRepository;
