//! Error types for the flatpng library.

use std::fmt;

/// Result type alias for flatpng operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or inspecting a PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions or palette depth at construction.
    InvalidDimensions {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// Palette depth (valid range 1-256).
        depth: u16,
    },
    /// Image dimensions exceed maximum supported size.
    ImageTooLarge {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// Maximum supported dimension.
        max: u32,
    },
    /// The palette already holds `capacity` distinct colors (strict mode only).
    PaletteExhausted {
        /// Configured palette depth.
        capacity: u16,
    },
    /// Pixel coordinates outside the image bounds.
    PixelOutOfRange {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// Foreign Base64 PNG text could not be decoded.
    MalformedText(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions {
                width,
                height,
                depth,
            } => {
                write!(
                    f,
                    "Invalid image parameters: {}x{} with palette depth {}",
                    width, height, depth
                )
            }
            Error::ImageTooLarge { width, height, max } => {
                write!(
                    f,
                    "Image {}x{} exceeds maximum dimension {}",
                    width, height, max
                )
            }
            Error::PaletteExhausted { capacity } => {
                write!(f, "Palette is full: all {} entries allocated", capacity)
            }
            Error::PixelOutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({}, {}) outside image bounds {}x{}",
                    x, y, width, height
                )
            }
            Error::MalformedText(msg) => {
                write!(f, "Malformed Base64 PNG text: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
