// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Carousel(CarouselError),
}

/// Failures reported by the carousel controller.
///
/// Only direct navigation can fail; every other operation is total over a
/// well-formed controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A direct jump targeted an index past the last slide.
    OutOfRange { index: usize, slide_count: usize },

    /// A carousel was requested with no slides at all.
    EmptyDeck,
}

impl CarouselError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CarouselError::OutOfRange { .. } => "error-carousel-out-of-range",
            CarouselError::EmptyDeck => "error-carousel-empty",
        }
    }
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::OutOfRange { index, slide_count } => write!(
                f,
                "Slide index {} is out of range (carousel has {} slides)",
                index, slide_count
            ),
            CarouselError::EmptyDeck => write!(f, "Carousel has no slides"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Carousel(e) => write!(f, "Carousel Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CarouselError> for Error {
    fn from(err: CarouselError) -> Self {
        Error::Carousel(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
