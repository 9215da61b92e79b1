//! # flatpng
//!
//! An in-memory builder for palette-indexed PNG files.
//!
//! The pixel data is wrapped in a legal zlib/DEFLATE stream made entirely
//! of stored (uncompressed) blocks, so the output needs no compression
//! codec and is deterministic byte for byte. Every chunk offset is a
//! closed-form function of the image dimensions and palette depth; the
//! whole file is allocated once and written in place.
//!
//! ## Features
//!
//! - **Indexed color** (PNG color type 3) with per-entry transparency
//! - **Stored DEFLATE framing**, valid per RFC 1950/1951
//! - **Hand-implemented CRC-32 and Adler-32** with shared lookup table
//! - Base64 output and a dimension sniffer for foreign Base64 PNGs
//!
//! ## Example
//!
//! ```rust
//! use flatpng::Image;
//!
//! let mut image = Image::new(16, 16, 4)?;
//! let red = image.allocate_color(255, 0, 0);
//! image.set_pixel(3, 3, red)?;
//! let png = image.dump();
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), flatpng::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checksum;
pub mod error;
pub mod image;
pub mod layout;
pub mod sniff;

mod palette;
mod stored;

pub use crate::error::{Error, Result};
pub use crate::image::{Image, PNG_SIGNATURE};
