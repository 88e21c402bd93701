//! # recipe-api
//!
//! HTTP API server for the recipe store.
//!
//! This crate provides the HTTP surface over [`recipe_core::RecipeStore`]:
//! - `GET /api/recipes` lists every recipe
//! - `POST /api/recipes` creates one and answers `201` with the stored record
//! - `DELETE /api/recipes/{id}` removes one and answers `204`, even for unknown ids
//! - `GET /health` reports liveness and the record count
//! - Optional static file serving for the front-end bundle

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, Error, Result};
pub use routes::{app, router};
pub use server::Server;
pub use state::AppState;
