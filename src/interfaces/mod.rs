//! Adapters that expose the engine to the outside world: the CSV catalog
//! loader and the HTTP API.

pub mod csv;
pub mod http;
