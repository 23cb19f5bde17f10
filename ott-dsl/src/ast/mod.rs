//! Abstract Syntax Tree types for the three OTT dialects.
//!
//! Every node is an owned value tree built once per parse call. Serialized
//! field names are camelCase (`returnType`, `extends`, `default`, `type`)
//! to match the documents downstream generators consume.

pub mod request;
pub mod response;
pub mod schema;

pub use request::*;
pub use response::*;
pub use schema::*;
