//! Style resolution.

mod engine;

pub use engine::{resolve, StyleResolver};
