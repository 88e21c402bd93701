//! Client-side mirror of the server's recipe collection.
//!
//! The mirror has no authority of its own. It is filled from `list`, then
//! patched only after the server confirms a create or delete:
//!
//! - a confirmed create is prepended with its server-assigned id
//! - a confirmed delete drops that id
//! - a failed create or delete leaves the mirror untouched and returns the
//!   error, so the caller decides whether to tell the user
//!
//! Only a failed list fills the user-facing [`error`](RecipeMirror::error) slot.
//!
//! Call progress is published on a watch channel; other tasks follow it via
//! [`RecipeMirror::subscribe`] while a call is awaiting the server.

use std::fmt;

use recipe_core::{NewRecipe, Recipe, RecipeId};
use tokio::sync::watch;

use crate::{RecipeApi, Result};

/// Message shown when the initial load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load recipes, please try again later.";

// ============================================================================
// OpStatus
// ============================================================================

/// Progress of the most recent call of one kind (list, add or delete).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OpStatus {
    /// Never issued.
    #[default]
    Idle,
    /// Request sent, no response yet.
    Pending,
    /// The server confirmed the call.
    Succeeded,
    /// The call failed.
    Failed(String),
}

impl OpStatus {
    /// Returns `true` while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the call failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Failure recorded when a call's future is dropped before the server answers.
const CANCELLED: &str = "cancelled";

impl fmt::Display for OpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// MirrorStatus
// ============================================================================

/// Progress of each kind of call, as broadcast to subscribers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MirrorStatus {
    /// Last list call
    pub list: OpStatus,
    /// Last add call
    pub add: OpStatus,
    /// Last delete call
    pub delete: OpStatus,
}

impl MirrorStatus {
    /// Whether a list request is in flight.
    pub fn is_loading(&self) -> bool {
        self.list.is_pending()
    }
}

fn list_slot(status: &mut MirrorStatus) -> &mut OpStatus {
    &mut status.list
}

fn add_slot(status: &mut MirrorStatus) -> &mut OpStatus {
    &mut status.add
}

fn delete_slot(status: &mut MirrorStatus) -> &mut OpStatus {
    &mut status.delete
}

/// One in-flight call. Marks its slot pending on start; if dropped before
/// [`finish`](Self::finish), the slot is settled as failed instead of
/// staying pending.
struct PendingCall<'a> {
    status: &'a watch::Sender<MirrorStatus>,
    slot: fn(&mut MirrorStatus) -> &mut OpStatus,
}

impl<'a> PendingCall<'a> {
    fn start(
        status: &'a watch::Sender<MirrorStatus>,
        slot: fn(&mut MirrorStatus) -> &mut OpStatus,
    ) -> Self {
        status.send_modify(|s| *slot(s) = OpStatus::Pending);
        Self { status, slot }
    }

    fn finish(self, outcome: OpStatus) {
        self.status.send_modify(|s| *(self.slot)(s) = outcome);
    }
}

impl Drop for PendingCall<'_> {
    fn drop(&mut self) {
        let slot = self.slot;
        self.status.send_if_modified(|s| {
            let op = slot(s);
            if op.is_pending() {
                *op = OpStatus::Failed(CANCELLED.to_string());
                true
            } else {
                false
            }
        });
    }
}

// ============================================================================
// RecipeEvent
// ============================================================================

/// A user action relayed unchanged from a UI element up to the mirror owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeEvent {
    /// The form submitted a new recipe.
    Add(NewRecipe),
    /// A card asked to delete itself.
    Delete(RecipeId),
}

// ============================================================================
// RecipeMirror
// ============================================================================

/// Local copy of the recipe collection plus load and error state.
pub struct RecipeMirror<A> {
    api: A,
    recipes: Vec<Recipe>,
    error: Option<String>,
    status: watch::Sender<MirrorStatus>,
}

impl<A: RecipeApi> RecipeMirror<A> {
    /// Create an empty mirror over `api`. Call [`boot`](Self::boot) to fill it.
    pub fn new(api: A) -> Self {
        let (status, _rx) = watch::channel(MirrorStatus::default());
        Self {
            api,
            recipes: Vec::new(),
            error: None,
            status,
        }
    }

    /// Load the collection from the server, replacing the mirror.
    ///
    /// On failure the error slot is set to [`LOAD_ERROR_MESSAGE`] and the
    /// mirror keeps whatever it held before.
    pub async fn boot(&mut self) -> Result<()> {
        self.error = None;
        let call = PendingCall::start(&self.status, list_slot);

        match self.api.list().await {
            Ok(recipes) => {
                tracing::info!(count = recipes.len(), "Recipes loaded");
                self.recipes = recipes;
                call.finish(OpStatus::Succeeded);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load recipes");
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                call.finish(OpStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Re-fetch the whole collection. Same protocol as [`boot`](Self::boot).
    pub async fn refresh(&mut self) -> Result<()> {
        self.boot().await
    }

    /// Create a recipe on the server and prepend the confirmed record.
    ///
    /// Blank fields are rejected locally without a request.
    pub async fn add(&mut self, new: NewRecipe) -> Result<Recipe> {
        new.validate()?;

        let call = PendingCall::start(&self.status, add_slot);
        match self.api.create(&new).await {
            Ok(recipe) => {
                tracing::info!(id = %recipe.id, "Recipe added");
                self.recipes.insert(0, recipe.clone());
                call.finish(OpStatus::Succeeded);
                Ok(recipe)
            }
            Err(e) => {
                tracing::warn!(error = %e, title = %new.title, "Failed to add recipe");
                call.finish(OpStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Delete a recipe on the server and drop it from the mirror.
    pub async fn delete(&mut self, id: RecipeId) -> Result<()> {
        let call = PendingCall::start(&self.status, delete_slot);
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id = %id, "Recipe deleted");
                self.recipes.retain(|recipe| recipe.id != id);
                call.finish(OpStatus::Succeeded);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, id = %id, "Failed to delete recipe");
                call.finish(OpStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Route a relayed user action to [`add`](Self::add) or [`delete`](Self::delete).
    pub async fn dispatch(&mut self, event: RecipeEvent) -> Result<()> {
        match event {
            RecipeEvent::Add(new) => self.add(new).await.map(|_| ()),
            RecipeEvent::Delete(id) => self.delete(id).await,
        }
    }

    /// The mirrored records, newest additions first.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Whether a list request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status.borrow().is_loading()
    }

    /// User-facing load error, if the last list failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Snapshot of every call's progress.
    pub fn status(&self) -> MirrorStatus {
        self.status.borrow().clone()
    }

    /// Status of the last list call.
    pub fn list_status(&self) -> OpStatus {
        self.status.borrow().list.clone()
    }

    /// Status of the last add call.
    pub fn add_status(&self) -> OpStatus {
        self.status.borrow().add.clone()
    }

    /// Status of the last delete call.
    pub fn delete_status(&self) -> OpStatus {
        self.status.borrow().delete.clone()
    }

    /// Follow call progress from another task.
    pub fn subscribe(&self) -> watch::Receiver<MirrorStatus> {
        self.status.subscribe()
    }
}

impl<A> fmt::Debug for RecipeMirror<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status.borrow();
        f.debug_struct("RecipeMirror")
            .field("recipes", &self.recipes.len())
            .field("loading", &status.is_loading())
            .field("error", &self.error)
            .field("list_status", &status.list)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
