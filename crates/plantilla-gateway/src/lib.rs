//! Gateway transport: HTTP access to the MS Plantilla API gateway.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::GatewayClient;
