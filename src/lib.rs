//! Toonpass - stylized pixelation stage
//!
//! Wraps the `hue-pixelate` kernel as a compositing stage with runtime
//! settings, a PNG codec, a CLI and an HTTP filter server.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
