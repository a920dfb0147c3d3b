//! Adapter implementations for the record store port.

pub mod memory;
