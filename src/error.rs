//! Crate-level error type and `Result` alias for the encode and write steps.
//! Wraps the QR encoder's rejection and the I/O failure of the SVG write.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("QR encoding error: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
