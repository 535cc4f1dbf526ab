//! # Byte Encoders
//! This is a small library for converting byte sequences to and from textual
//! representations such as Base64 and hex. Every codec implements the common
//! [`Encoder`] trait, so call sites written against `&dyn Encoder` can swap
//! one encoding for another without changing.
//! ## Installation
//! To add it to your existing project:
//! ```bash
//! cargo add byte_encoders
//! ```
//! ## Encodings Supported
//! This library currently supports:
//! - Base64 (standard alphabet, strict RFC 4648 padding)
//! - Hex (lowercase output, case-insensitive decode)
//!
//! If you'd like to see more encodings supported, please either submit an issue request or a PR.
//!
//! ## Example Code
//! ```
//! use byte_encoders::{Base64, Encoder, EncodingError};
//!
//! # fn main() -> Result<(), EncodingError> {
//! let codec = Base64;
//!
//! // Encode some bytes; a `None` input would pass through untouched
//! let encoded = codec.encode(Some(b"hello".as_slice()));
//! assert_eq!(Some("aGVsbG8="), encoded.as_deref());
//!
//! // Decode them back
//! let decoded = codec.decode(encoded.as_deref())?;
//! assert_eq!(Some(b"hello".as_slice()), decoded.as_deref());
//! # Ok(())
//! # }
//! ```

pub mod base64;
pub mod encoder;
pub mod error;
pub mod hex;

pub use crate::base64::Base64;
pub use crate::encoder::Encoder;
pub use crate::error::EncodingError;
pub use crate::hex::Hex;
