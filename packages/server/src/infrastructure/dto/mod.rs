//! Data transfer objects exchanged at the HTTP boundary.

pub mod http;
