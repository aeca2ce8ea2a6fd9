//! Domain layer for the Reddit persona generator.
//!
//! Holds the models, the pure transforms (username resolution, persona
//! synthesis, report formatting), and the traits the outer layers implement.

pub mod activity;
pub mod config;
pub mod error;
pub mod notification;
pub mod persona;
pub mod profile;
pub mod session;

// Re-export common error type
pub use error::{Result, RpgError};
