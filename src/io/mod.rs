//! I/O layer: `writers` for the files qrsvg produces.
pub mod writers;
