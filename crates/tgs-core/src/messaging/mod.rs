//! Outgoing request shapes and how they become request bodies.

pub mod types;
