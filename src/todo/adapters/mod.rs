//! Adapter implementations of todo ports.

pub mod memory;
