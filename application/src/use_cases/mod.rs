//! Application use cases

pub mod transcript;
