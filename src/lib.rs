//! Tiaoqi engine library.
//!
//! Exposes the board representation, reachability search, and text
//! interface modules for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod engine;
pub mod error;
pub mod movegen;
pub mod protocol;
