use crate::error::EncodingError;

/// The capability implemented by every byte-to-text codec in this library.
///
/// Implementations are pure transformations with no mutable state, so a
/// single value can be shared across any number of threads without
/// coordination. Code written against `&dyn Encoder` can swap one encoding
/// for another without changing.
pub trait Encoder {
    /// Encodes a byte sequence into its textual representation.
    ///
    /// A `None` input passes through as `None`. Encoding never fails; the
    /// empty slice encodes to the empty string.
    fn encode(&self, data: Option<&[u8]>) -> Option<String>;

    /// Decodes a textual representation back into the original bytes.
    ///
    /// A `None` input passes through as `Ok(None)`, which is not an error.
    /// Malformed input fails with [`EncodingError::InvalidEncoding`]; the
    /// error propagates to the caller rather than being folded into the
    /// `None` passthrough.
    fn decode(&self, value: Option<&str>) -> Result<Option<Vec<u8>>, EncodingError>;
}
