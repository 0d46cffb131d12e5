//! Core abstractions for diagram layout
//!
//! This module defines the data model, the sizing and category tables, the
//! resolved graph view, and the trait every layout strategy implements.

mod config;
mod error;
mod geometry;
mod graph;
mod layout;
pub mod logging;
mod palette;
mod text;
mod types;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use graph::*;
pub use layout::*;
pub use logging::*;
pub use palette::*;
pub use text::*;
pub use types::*;
