use crate::encoder::Encoder;
use crate::error::EncodingError;
use hex;
use log::debug;

/// Hex codec. Encodes to lowercase hex, 2 characters per byte; decoding
/// accepts both cases and rejects odd-length input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hex;

impl Encoder for Hex {
    fn encode(&self, data: Option<&[u8]>) -> Option<String> {
        data.map(hex::encode)
    }

    fn decode(&self, value: Option<&str>) -> Result<Option<Vec<u8>>, EncodingError> {
        match value {
            None => Ok(None),
            Some(value) => match hex::decode(value) {
                Ok(data) => Ok(Some(data)),
                Err(error) => {
                    debug!("Error decoding hex value: {}", error);
                    Err(error.into())
                }
            },
        }
    }
}
