//! Domain layer - Core business logic with no external dependencies.

pub mod menu;
pub mod orders;
pub mod shared;
