use thiserror::Error;

use component::ColorParseError;
use text::TextError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Text(#[from] TextError),

    #[error("Invalid palette color: {0}")]
    Palette(#[from] ColorParseError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
