// hotspotctl-api: Async Rust client for the RouterOS REST API

pub mod error;
pub mod resource;
pub mod rest;
pub mod transport;

pub use error::Error;
pub use resource::{Fields, ID_FIELD, ResourceClient, ResourcePath, Row};
pub use rest::RestClient;
pub use transport::{TlsMode, TransportConfig};
