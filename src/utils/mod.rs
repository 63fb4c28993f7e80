//! Utility modules

mod styling;

pub use styling::*;
