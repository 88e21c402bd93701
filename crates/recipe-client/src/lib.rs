//! # recipe-client
//!
//! Rust client library for the recipe API.
//!
//! This crate provides:
//! - [`RecipeApi`], the seam between client state and the wire
//! - [`RecipeClient`], the reqwest-backed implementation
//! - [`RecipeMirror`], the client's local copy of the server collection,
//!   patched after each confirmed server response

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod mirror;

pub use client::{RecipeApi, RecipeClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use mirror::{LOAD_ERROR_MESSAGE, MirrorStatus, OpStatus, RecipeEvent, RecipeMirror};
