//! Shared handler state.

use std::sync::Arc;

use recipe_core::RecipeStore;

use crate::ServerConfig;

/// State handed to every request handler.
///
/// Cheap to clone; all clones share one [`RecipeStore`].
#[derive(Clone, Debug)]
pub struct AppState {
    /// The authoritative recipe collection.
    pub store: Arc<RecipeStore>,
}

impl AppState {
    /// Wrap an existing store.
    pub fn new(store: RecipeStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the store the config asks for (seeded or empty).
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = if config.seed {
            RecipeStore::seeded()
        } else {
            RecipeStore::new()
        };
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_seeded() {
        let state = AppState::from_config(&ServerConfig::default());
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_from_config_empty() {
        let config = ServerConfig {
            seed: false,
            ..Default::default()
        };
        assert!(AppState::from_config(&config).store.is_empty());
    }

    #[test]
    fn test_clone_shares_store() {
        let state = AppState::new(RecipeStore::new());
        let other = state.clone();
        other
            .store
            .create(recipe_core::NewRecipe::new("Soup", "Hot broth"))
            .ok();
        assert_eq!(state.store.len(), 1);
    }
}
