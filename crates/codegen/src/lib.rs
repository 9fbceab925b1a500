//! Request example generation for catalog endpoints.
//!
//! Given a provider, an endpoint, and a target environment, this crate
//! renders copy-pasteable request examples: a cURL invocation and a
//! JavaScript `fetch` snippet. Rendering is pure string assembly over the
//! immutable catalog types; nothing here performs I/O or network calls.

pub mod curl;
pub mod fetch;
pub mod policy;

pub use curl::curl_example;
pub use fetch::fetch_example;
pub use policy::{policy_for, HeaderPolicy, HeaderRule, HeaderWhen};
