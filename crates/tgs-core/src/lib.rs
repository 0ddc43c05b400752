//! Core of the stateless Telegram Bot API client.
//!
//! Nothing here knows about a concrete HTTP stack: requests leave through the
//! [`ports::Transport`] trait, which the `tgs-http` crate implements over `reqwest`.
//! Faults are reported through [`ports::Diagnostics`] and returned as values, never
//! raised.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod ports;

pub use dispatch::Dispatcher;
pub use errors::{Error, Failure, Result};
