use crate::encoder::Encoder;
use crate::error::EncodingError;
use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;

/// Standard Base64 codec (RFC 4648, alphabet `A-Za-z0-9+/`).
///
/// Encoded output is padded with `=` to a multiple of 4 characters and
/// contains no line breaks; it is roughly 33% larger than the input, as it
/// takes 4 characters to represent 3 bytes. Decoding is strict: canonical
/// padding is required, and whitespace or any character outside the alphabet
/// is rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base64;

impl Encoder for Base64 {
    fn encode(&self, data: Option<&[u8]>) -> Option<String> {
        data.map(|data| STANDARD.encode(data))
    }

    fn decode(&self, value: Option<&str>) -> Result<Option<Vec<u8>>, EncodingError> {
        match value {
            None => Ok(None),
            Some(value) => match STANDARD.decode(value) {
                Ok(data) => Ok(Some(data)),
                Err(error) => {
                    debug!("Error decoding base64 value: {}", error);
                    Err(error.into())
                }
            },
        }
    }
}
