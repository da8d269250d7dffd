//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the HTTP
//! layer and the provider.

pub mod recommendations;
