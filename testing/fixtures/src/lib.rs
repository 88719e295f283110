//! Fixture model for end-to-end tests. `build.rs` generates the mutators
//! for [`acme::Acme`] and everything reachable from it.

pub mod acme;

pub use acme::*;
