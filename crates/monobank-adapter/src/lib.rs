/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Monobank adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;
pub mod webhook;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    ApiResponse,
    BodyStream,
    BoxError,
    BufferedBody,
    ClientConfig,
    Codec,
    JsonCodec,
    MonoError,
    Personal,
    Public,
    ReqwestTransport,
    Result,
    Transport,
    DEFAULT_DOMAIN,
    DEFAULT_WEBHOOK_CAPACITY,
    MAX_ALLOWED_DURATION,
};

// Re-export all types
pub use types::*;

// Re-export the webhook handler
pub use webhook::WebhookHandler;
