//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_resource_transport;

pub use http_resource_transport::{HttpResourceTransport, REQUEST_ID_HEADER};
