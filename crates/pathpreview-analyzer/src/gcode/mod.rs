//! G-Code line handling
//!
//! This module provides:
//! - Command classification on exact tokens
//! - Comment stripping
//! - Axis word parsing into partial points

pub mod classifier;
pub mod parser;

pub use classifier::*;
pub use parser::*;
