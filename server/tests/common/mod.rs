//! Shared test adapters and fixtures for the gate and context tests.

pub mod adapters;

pub use adapters::*;
