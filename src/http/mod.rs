//! HTTP client layer — `CoincapHttp`, one method per endpoint.

pub mod client;

pub use client::CoincapHttp;
