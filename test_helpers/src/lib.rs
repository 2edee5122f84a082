//! Test helpers shared across crates.
//!
//! This crate provides argument-vector builders and a callback recorder.

pub mod argv;
pub mod calls;
