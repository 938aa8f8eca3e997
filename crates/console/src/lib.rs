//! `partstock-console` — line-oriented front end for the inventory service.
//!
//! Stands in for the desktop screens: it turns typed commands into service
//! calls and renders the results. All user-facing text and all logging live
//! here; the service itself stays silent.

pub mod command;
pub mod config;
pub mod console;
pub mod render;

pub use command::{Command, CommandError};
pub use config::ConsoleConfig;
pub use console::{Console, Flow};
