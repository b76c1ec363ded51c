//! Sevens (workspace facade crate).
//!
//! Re-exports the workspace crates as `sevens::{core, cpu, types}` and hosts
//! the headless [`autoplay`] session used by the `sevens` binary.

pub mod autoplay;

pub use sevens_core as core;
pub use sevens_cpu as cpu;
pub use sevens_types as types;
