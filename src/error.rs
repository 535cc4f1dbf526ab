use base64::DecodeError;
use hex::FromHexError;

#[derive(Debug)]
pub enum EncodingError {
    InvalidEncoding(String),
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding(error) => write!(f, "Invalid encoding: {}", error),
        }
    }
}

impl std::error::Error for EncodingError {}

impl EncodingError {
    pub fn invalid_encoding(msg: &str) -> EncodingError {
        EncodingError::InvalidEncoding(msg.to_string())
    }
}

impl From<DecodeError> for EncodingError {
    fn from(error: DecodeError) -> EncodingError {
        EncodingError::InvalidEncoding(error.to_string())
    }
}

impl From<FromHexError> for EncodingError {
    fn from(error: FromHexError) -> EncodingError {
        EncodingError::InvalidEncoding(error.to_string())
    }
}
