//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `pipeline.rs` — Pure transformations over domain types
//! - `client.rs` — Sub-client with HTTP methods

pub mod history;
