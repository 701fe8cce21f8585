//! Application layer: use cases and boundary DTOs.
//!
//! Use cases are generic over the repository ports defined in the domain
//! layer, so the HTTP adapter and tests can supply any store implementation.

pub mod dto;
pub mod use_cases;
