//! Utility library for the pfxdiff project

pub mod compression;
pub mod dates;
pub mod serde;
