//! Shared task model and persistence format for `TermTask`.

pub mod seed;
pub mod snapshot;
pub mod task;
