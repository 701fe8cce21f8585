//! Persistence Adapters
//!
//! Store implementations of the repository traits.

pub mod collection;
pub mod in_memory;

pub use collection::Collection;
pub use in_memory::{InMemoryMenuRepository, InMemoryOrderRepository};
