//! Checksum engines for PNG chunks and the zlib stream.

pub mod adler32;
pub mod crc32;

pub use adler32::{adler32, Adler32};
pub use crc32::crc32;
