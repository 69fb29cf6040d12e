//! Kerala Transit loyalty and pricing engine.
//!
//! The presentation layer loads an [`EngineConfig`](kt_core::config::EngineConfig),
//! installs tracing, and calls the use cases returned by
//! [`bootstrap::wire_use_cases`].

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, wire_use_cases, AppUseCases};
pub use kt_app as app;
pub use kt_core as domain;
