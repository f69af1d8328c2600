//! Core of qrsvg: the QR encoding capability, delegated to the `qrcode` crate.
pub mod symbol;

pub use symbol::Symbol;
