//! tunepick-ui - Store and pure view components for the favorite-artist page
//!
//! Views take a `ReadStore` plus callbacks and never touch the network; the
//! web crate owns the store and wires the callbacks.

pub mod components;
pub mod display_types;
pub mod stores;

#[cfg(test)]
mod test_support;

pub use components::*;
pub use display_types::*;
