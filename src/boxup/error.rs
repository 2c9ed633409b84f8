use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxupError {
    #[error("unknown box style {0}, expected 1-4")]
    UnknownStyle(u8),

    #[error("custom glyph must be exactly one character, got {0:?}")]
    InvalidCustomGlyph(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BoxupError>;
