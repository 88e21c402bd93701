//! # recipe-cli
//!
//! Command-line entry point for the recipe service.
//!
//! This crate provides the `recipes` binary:
//! - `serve` runs the HTTP API (and optionally the front-end bundle)
//! - `list`, `add`, `delete` talk to a running server through the client mirror
//! - `config path|show|init` manage the TOML config file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::Cli;
pub use config::RecipeConfig;
pub use error::{Error, Result};
