//! Bit-level building blocks.
//!
//! This module provides:
//! - Least-significant-bit helpers for 8-bit color channels
//! - A bit-packed stream used as the intermediate form in both directions

mod lsb;
mod stream;

pub use lsb::{get_lsb, set_lsb};
pub use stream::{BitStream, Iter};
