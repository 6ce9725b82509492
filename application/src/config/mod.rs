//! Application configuration

pub mod lifecycle_params;

pub use lifecycle_params::LifecycleParams;
