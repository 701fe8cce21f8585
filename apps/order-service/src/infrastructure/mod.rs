//! Infrastructure layer: driver and driven adapters.
//!
//! The HTTP controller drives the application use cases; the persistence
//! adapters implement the domain repository ports.

pub mod http;
pub mod persistence;
