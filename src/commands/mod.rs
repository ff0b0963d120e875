//! Command implementations.

pub mod scan;

pub use scan::{ScanCommand, ScanStats};
