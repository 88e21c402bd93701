//! Route table and request handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use recipe_core::{NewRecipe, Recipe, RecipeId};

use crate::{ApiError, AppState, ServerConfig};

/// Build the API routes over `state`.
///
/// Mounts:
/// - `GET /api/recipes`, `POST /api/recipes`
/// - `DELETE /api/recipes/{id}`
/// - `GET /health`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route("/api/recipes/{id}", axum::routing::delete(delete_recipe))
        .route("/health", get(health))
        .with_state(state)
}

/// The full application: API routes, optional static front-end, request tracing.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let mut app = router(state);

    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "Serving static files");
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http())
}

async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let recipes = state.store.list();
    tracing::debug!(count = recipes.len(), "Listing recipes");
    Json(recipes)
}

async fn create_recipe(
    State(state): State<AppState>,
    Json(new): Json<NewRecipe>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let recipe = state.store.create(new)?;
    tracing::info!(id = %recipe.id, title = %recipe.title, "Recipe created");
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Any base-10 integer is a valid id segment. Integers no [`RecipeId`] can
/// hold (negative, or past `u64::MAX`) match no record, so they are a no-op.
async fn delete_recipe(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = match segment.parse::<RecipeId>() {
        Ok(id) => id,
        Err(_) if is_integer(&segment) => {
            tracing::info!(id = %segment, removed = false, "Recipe delete");
            return Ok(StatusCode::NO_CONTENT);
        }
        Err(e) => return Err(e.into()),
    };
    let removed = state.store.delete(id);
    tracing::info!(id = %id, removed, "Recipe delete");
    Ok(StatusCode::NO_CONTENT)
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "recipes": state.store.len(),
    }))
}

// ============================================================================
// Tests
// ============================================================================
