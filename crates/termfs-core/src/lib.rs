//! Virtual filesystem navigator driven by a small command interpreter.
//!
//! This crate provides:
//! - [`VirtualFs`] read-only tree and path resolution
//! - [`NavigationState`] current position and visit history
//! - [`Command`] parsing and the [`Interpreter`] that dispatches input lines
//! - [`Terminal`] input surface with echo, scrollback and entry activation
//! - [`loader`] for JSON snapshots, with a fallback tree on failure

mod commands;
pub mod config;
pub mod error;
mod filesystem;
pub mod loader;
pub mod models;
mod navigation;
mod terminal;

pub use commands::{Command, CommandResult, Interpreter, PathArg, cd_target, execute_command};
pub use error::{LoadError, ResolveError};
pub use filesystem::VirtualFs;
pub use navigation::NavigationState;
pub use terminal::{Scrollback, Terminal};
