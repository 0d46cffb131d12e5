//! Drawing output
//!
//! [`elements`] turns positions into ordered drawing elements that still
//! know where they came from; [`primitives`] flattens them into the JSON
//! instructions a canvas renderer consumes.

pub mod elements;
pub mod primitives;

pub use elements::*;
pub use primitives::*;
