//! Utility modules

pub mod collecting_observer;
pub mod sequence;

pub use collecting_observer::*;
pub use sequence::*;
