//! ReqGen - Synthetic Trade-Clearing Request Generator
//!
//! Fabricates randomized request batches for exercising a downstream
//! trade/clearing system.
//!
//! # Modules
//!
//! - [`models`] - Request, Destination, and Content types
//! - [`generator`] - Randomized request construction
//! - [`render`] - Human-readable console output
//! - [`config`] - YAML-backed application configuration
//! - [`logging`] - Tracing subscriber setup

pub mod config;
pub mod generator;
pub mod logging;
pub mod models;
pub mod render;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError, GeneratorConfig};
pub use generator::RequestGenerator;
pub use models::{
    Content, Destination, FtpType, MerlinDestination, MlClearDestination, ReqState, ReqSystem,
    ReqType, Request, TargetSystem,
};
pub use render::render_request;
