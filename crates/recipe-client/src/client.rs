//! Recipe API client implementation

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;

use recipe_core::{NewRecipe, Recipe, RecipeId};

use crate::{ClientConfig, Error, Result};

/// The three calls the client state needs from a recipe server.
///
/// [`RecipeClient`] implements this over HTTP; tests substitute an
/// in-process fake.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `GET /api/recipes`
    async fn list(&self) -> Result<Vec<Recipe>>;

    /// `POST /api/recipes`, returning the stored record with its id.
    async fn create(&self, new: &NewRecipe) -> Result<Recipe>;

    /// `DELETE /api/recipes/{id}`
    async fn delete(&self, id: RecipeId) -> Result<()>;
}

/// HTTP client for the recipe API.
#[derive(Clone, Debug)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeClient {
    /// Create a client from its config.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Server root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn recipes_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    fn recipe_url(&self, id: RecipeId) -> String {
        format!("{}/api/recipes/{id}", self.base_url)
    }
}

#[async_trait]
impl RecipeApi for RecipeClient {
    async fn list(&self) -> Result<Vec<Recipe>> {
        tracing::debug!(url = %self.recipes_url(), "Fetching recipes");
        let response = self.http.get(self.recipes_url()).send().await?;
        decode(check_status(response)?).await
    }

    async fn create(&self, new: &NewRecipe) -> Result<Recipe> {
        tracing::debug!(title = %new.title, "Creating recipe");
        let response = self.http.post(self.recipes_url()).json(new).send().await?;
        decode(check_status(response)?).await
    }

    async fn delete(&self, id: RecipeId) -> Result<()> {
        tracing::debug!(id = %id, "Deleting recipe");
        let response = self.http.delete(self.recipe_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status { status })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = RecipeClient::new(&ClientConfig::new("http://localhost:3100/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3100");
        assert_eq!(client.recipes_url(), "http://localhost:3100/api/recipes");
        assert_eq!(
            client.recipe_url(RecipeId::new(7)),
            "http://localhost:3100/api/recipes/7"
        );
    }

    #[test]
    fn test_new_with_timeout() {
        let config = ClientConfig {
            timeout_secs: Some(5),
            ..ClientConfig::default()
        };
        assert!(RecipeClient::new(&config).is_ok());
    }
}
