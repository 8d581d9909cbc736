//! Tour cost evaluation.

mod cost;

pub use cost::{cycle_length, path_length};
