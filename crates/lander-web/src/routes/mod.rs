//! Route handlers.

pub mod content;
pub mod design;
pub mod generate;
pub mod session;
