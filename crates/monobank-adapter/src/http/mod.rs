/*
[INPUT]:  Client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod codec;
pub mod error;
pub mod personal;
pub mod public;
pub mod transport;

pub use client::{ClientConfig, DEFAULT_DOMAIN, DEFAULT_WEBHOOK_CAPACITY};
pub use codec::{Codec, JsonCodec};
pub use error::{MonoError, Result};
pub use personal::{Personal, MAX_ALLOWED_DURATION};
pub use public::Public;
pub use transport::{
    ApiRequest, ApiResponse, BodyStream, BoxError, BufferedBody, ReqwestTransport, Transport,
};
