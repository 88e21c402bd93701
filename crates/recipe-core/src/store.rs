//! The authoritative in-memory recipe collection.
//!
//! [`RecipeStore`] owns the records and the id allocator behind a single
//! mutex. Every operation takes the lock exactly once, so list, create and
//! delete are atomic with respect to each other. There is no transaction
//! spanning two calls.
//!
//! # Usage
//!
//! ```rust
//! use recipe_core::{NewRecipe, RecipeId, RecipeStore};
//!
//! let store = RecipeStore::seeded();
//! let soup = store.create(NewRecipe::new("Soup", "Hot broth")).unwrap();
//! assert_eq!(soup.id, RecipeId::new(3));
//!
//! store.delete(soup.id);
//! assert_eq!(store.len(), 2);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Error, NewRecipe, Recipe, RecipeId, Result};

/// Records the store starts with when seeding is enabled.
const SEED: [(&str, &str); 2] = [("番茄炒蛋", "家常菜"), ("可乐鸡翅", "快手菜")];

// ============================================================================
// RecipeStore
// ============================================================================

/// In-memory recipe collection plus a monotonic id allocator.
///
/// Retired ids are never handed out again for the lifetime of the store.
pub struct RecipeStore {
    inner: Mutex<Inner>,
}

struct Inner {
    recipes: Vec<Recipe>,
    // `None` once `u64::MAX` has been allocated.
    next_id: Option<RecipeId>,
}

impl RecipeStore {
    /// Create an empty store. The first id allocated is 1.
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    /// Create a store holding the two default recipes (ids 1 and 2).
    pub fn seeded() -> Self {
        let recipes = SEED
            .iter()
            .zip(1u64..)
            .map(|((title, description), id)| Recipe {
                id: RecipeId::new(id),
                title: (*title).to_string(),
                description: (*description).to_string(),
            })
            .collect();
        Self::with_recipes(recipes)
    }

    /// Create a store from existing records.
    ///
    /// Records repeating an earlier id are dropped. The allocator starts
    /// one past the highest id seen.
    pub fn with_recipes(mut recipes: Vec<Recipe>) -> Self {
        let mut seen = HashSet::new();
        recipes.retain(|recipe| seen.insert(recipe.id));

        let next_id = recipes
            .iter()
            .map(|recipe| recipe.id)
            .max()
            .map_or(Some(RecipeId::new(1)), RecipeId::checked_next);

        Self {
            inner: Mutex::new(Inner { recipes, next_id }),
        }
    }

    /// Snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<Recipe> {
        self.lock().recipes.clone()
    }

    /// Look up a single record.
    pub fn get(&self, id: RecipeId) -> Option<Recipe> {
        self.lock()
            .recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
    }

    /// Validate, assign the next id, and append a new record.
    ///
    /// Fails with [`Error::IdsExhausted`] once `u64::MAX` has been used.
    pub fn create(&self, new: NewRecipe) -> Result<Recipe> {
        new.validate()?;

        let mut inner = self.lock();
        let id = inner.next_id.ok_or(Error::IdsExhausted)?;
        inner.next_id = id.checked_next();

        let recipe = Recipe::from_new(id, new);
        inner.recipes.push(recipe.clone());
        log::debug!("Created recipe {id} ({} total)", inner.recipes.len());

        Ok(recipe)
    }

    /// Remove the record with `id`.
    ///
    /// Deleting an unknown id is not an error; the return value only tells
    /// whether something was removed.
    pub fn delete(&self, id: RecipeId) -> bool {
        let mut inner = self.lock();
        let before = inner.recipes.len();
        inner.recipes.retain(|recipe| recipe.id != id);
        let removed = inner.recipes.len() != before;

        if removed {
            log::debug!("Deleted recipe {id}");
        } else {
            log::debug!("Delete of unknown recipe {id} ignored");
        }
        removed
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.lock().recipes.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next create will receive, if any remain.
    pub fn next_id(&self) -> Option<RecipeId> {
        self.lock().next_id
    }

    // A panic while holding the lock cannot leave `Inner` half-mutated, so
    // a poisoned mutex is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("RecipeStore")
            .field("len", &inner.recipes.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
