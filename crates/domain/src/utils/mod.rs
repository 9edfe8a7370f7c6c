//! Domain utilities

pub mod wire;
