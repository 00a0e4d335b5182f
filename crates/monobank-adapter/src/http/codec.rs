/*
[INPUT]:  Raw response/webhook bytes
[OUTPUT]: Decoded JSON values ready for typed deserialization
[POS]:    HTTP layer - codec seam, swappable for testing
[UPDATE]: When the decode contract changes
*/

use serde_json::Value;

/// Codec capability: bytes to a JSON value, or a decode failure.
///
/// Used for success payloads, error envelopes, and inbound webhook bodies
/// alike. Swap it out to inject decode failures in tests.
pub trait Codec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Value, serde_json::Error>;
}

/// Default codec over `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
