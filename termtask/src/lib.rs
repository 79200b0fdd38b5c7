//! `TermTask` client library: task store, view projection, persistence,
//! seed import, and the terminal UI built on top of them.

pub mod app;
pub mod config;
pub mod net;
pub mod storage;
pub mod tasks;
pub mod ui;
