//! HTTP client for the user API.
//!
//! Two historical wire conventions exist: credentials embedded in the URL
//! path, and credentials carried in request headers. The client exposes
//! both and measures per-call latency; picking a convention is up to the
//! caller and the server they are talking to.

mod http;

pub use http::{ApiResponse, ClientError, UserApiClient, UserData};
