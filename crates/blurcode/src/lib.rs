//! # blurcode
//!
//! A 100% Rust decoder for BlurHash-style placeholder codes.
//!
//! A BlurHash is a short base-83 ASCII string holding a handful of cosine
//! frequency components of a down-sampled image. Decoding reconstructs a
//! small, blurry RGB preview of the original at any requested size, which
//! is typically shown while the real image loads over the network.
//!
//! ## Quick Start
//!
//! ```rust
//! use blurcode::blurhash_decode;
//!
//! let image = blurhash_decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 32, 1.0)?;
//! // image.pixels contains packed RGB data (3 bytes per pixel)
//! assert_eq!(image.pixels.len(), 32 * 32 * 3);
//! # Ok::<(), blurcode::BlurhashError>(())
//! ```

use thiserror::Error;

pub mod base83;
pub mod color;
pub mod decoder;

pub use decoder::{
    blurhash_decode, blurhash_decode_default, components, CosineDecoder, Decode, DecodedImage,
};

/// Errors that can occur while decoding a BlurHash code.
#[derive(Debug, Error)]
pub enum BlurhashError {
    /// Code is shorter than the 6-character minimum (size flag, quantised
    /// maximum and DC term)
    #[error("code too short: {actual} characters, need at least 6")]
    TooShort { actual: usize },

    /// Code length doesn't match the component grid declared in its header
    #[error("code length mismatch: expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Requested output dimensions are zero or too large
    #[error("invalid output size: {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    /// Output pixel buffer could not be allocated
    #[error("failed to allocate {bytes} byte pixel buffer")]
    BufferAllocation { bytes: usize },
}

/// Result type for BlurHash operations.
pub type Result<T> = core::result::Result<T, BlurhashError>;

// Cap on width * height, keeps a hostile size request from exhausting
// memory before the fallible allocation even runs (256 MPx ~= 768 MB RGB)
pub(crate) const MAX_OUTPUT_PIXELS: usize = 256 * 1024 * 1024;
