//! Credential derivation for the timestamp-scoped user API.
//!
//! Every value here is a pure function of its inputs: an auth token proves
//! possession of the shared secret for one wall-clock second, a bearer token
//! binds a request to a specific auth token and user, and a transport
//! credential bundles all three reversibly for path-based transport.

mod derive;
mod transport;

pub use derive::{
    current_timestamp, derive_auth_token, derive_bearer_token, BearerFraming, CredentialError,
};
pub use transport::{
    decode_transport_credential, encode_transport_credential, DecodedCredential,
    TransportCredentialError,
};
