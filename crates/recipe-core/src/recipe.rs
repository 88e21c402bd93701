//! Recipe records and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Server-assigned identifier of a recipe.
///
/// Serialized as a bare JSON number and rendered as a base-10 integer,
/// which is also the form used in `DELETE /api/recipes/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u64);

impl RecipeId {
    /// Creates an id from its numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_core::RecipeId;
    ///
    /// let id = RecipeId::new(3);
    /// assert_eq!(id.to_string(), "3");
    /// ```
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one, or `None` past `u64::MAX`.
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RecipeId> for u64 {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecipeId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| Error::InvalidId(s.to_string()))
    }
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Server-assigned id
    pub id: RecipeId,

    /// Recipe name
    pub title: String,

    /// Short description
    pub description: String,
}

impl Recipe {
    /// Builds a record from an id and a validated draft.
    pub fn from_new(id: RecipeId, new: NewRecipe) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
        }
    }
}

/// Body of a create request: a recipe without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Recipe name
    pub title: String,

    /// Short description
    pub description: String,
}

impl NewRecipe {
    /// Creates a new draft.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Checks that both fields are present.
    ///
    /// A field consisting only of whitespace counts as missing.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::validation("description", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_id_parse() {
        let id: RecipeId = "42".parse().unwrap();
        assert_eq!(id, RecipeId::new(42));
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_recipe_id_parse_rejects_non_integer() {
        let err = "abc".parse::<RecipeId>().unwrap_err();
        assert_eq!(err, Error::InvalidId("abc".to_string()));
        assert!("-1".parse::<RecipeId>().is_err());
        assert!("1.5".parse::<RecipeId>().is_err());
    }

    #[test]
    fn test_recipe_id_checked_next() {
        assert_eq!(RecipeId::new(2).checked_next(), Some(RecipeId::new(3)));
        assert_eq!(RecipeId::new(u64::MAX).checked_next(), None);
    }

    #[test]
    fn test_recipe_wire_format() {
        let recipe = Recipe {
            id: RecipeId::new(3),
            title: "Soup".to_string(),
            description: "Hot broth".to_string(),
        };
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            value,
            json!({"id": 3, "title": "Soup", "description": "Hot broth"})
        );
    }

    #[test]
    fn test_new_recipe_from_json() {
        let new: NewRecipe =
            serde_json::from_value(json!({"title": "Soup", "description": "Hot broth"})).unwrap();
        assert_eq!(new, NewRecipe::new("Soup", "Hot broth"));
    }

    #[test]
    fn test_new_recipe_missing_field_fails_to_decode() {
        let result = serde_json::from_value::<NewRecipe>(json!({"title": "Soup"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_present_fields() {
        assert!(NewRecipe::new("Soup", "Hot broth").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = NewRecipe::new("", "Hot broth").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_validate_rejects_blank_description() {
        let err = NewRecipe::new("Soup", "   ").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "description"));
    }
}
