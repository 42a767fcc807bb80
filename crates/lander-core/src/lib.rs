//! Lander Core Library
//!
//! Campaign content and design state, merge updates, and the
//! AI-backed campaign generator.

pub mod config;
pub mod content;
pub mod design;
pub mod error;
pub mod generator;
pub mod session;

pub use error::{LanderError, LanderResult};
