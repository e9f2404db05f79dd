//! Mode implementations.

pub mod extract;
pub mod pack;
