//! Host-facing primitives for the nodewrap launcher.
//!
//! This crate knows how the operating system hands a command line to a
//! process and how to hand one to a child. It carries no policy about which
//! interpreter runs or where its paths come from.

pub use error::{Error, Result};

pub mod cmdline;
pub mod command;
pub mod dir;
mod error;
