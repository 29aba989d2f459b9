//! Utility modules

pub mod parallelism;
