//! Selector keys.
//!
//! Only three selector forms exist: a node kind (`Button`), a single class
//! (`.primary`) and a compound of classes matched together (`.primary.large`).

mod key;

pub use key::SelectorKey;
