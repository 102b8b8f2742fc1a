//! countrylist-rs
//! ==============
//!
//! Umbrella crate for the workspace: re-exports [`countrylist_core`] so the
//! demos under `demos/` can be run with `cargo run --example <name>`.
//!
//! - Core library: `crates/countrylist-core`
//! - Browser front end: `crates/countrylist-wasm`

pub use countrylist_core::*;
