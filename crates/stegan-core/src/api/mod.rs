//! File based builder API, `prepare()` a task, configure it, `execute()` it.

pub mod capacity;
pub mod hide;
pub mod quality;
mod shared;
pub mod unveil;

pub use shared::*;
