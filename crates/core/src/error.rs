//! Core error type.

/// Errors from audio file handling.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV encode/decode error
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Sample format the reader does not handle
    #[error("unsupported WAV format: {0}")]
    UnsupportedFormat(String),
}
