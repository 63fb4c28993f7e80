//! Report module - presenting resolved options and project listings

pub mod summary;

pub use summary::*;
