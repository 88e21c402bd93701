//! Recipe Core: record types, errors, and the authoritative store.
//!
//! This crate has no internal dependencies (dependency level 0). Both the
//! HTTP server and the client build on the types defined here.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`recipe`]: [`Recipe`], [`NewRecipe`], and [`RecipeId`]
//! - [`store`]: [`RecipeStore`], the in-memory collection and id allocator

pub mod error;
pub mod recipe;
pub mod store;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use recipe::{NewRecipe, Recipe, RecipeId};
pub use store::RecipeStore;
