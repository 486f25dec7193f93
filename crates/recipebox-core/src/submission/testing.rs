//! Test doubles for the submission collaborators.
//!
//! [`FakeRecipeStore`] answers with a canned result and records every call;
//! [`RecordingHost`] counts close and refresh signals. Both let submission
//! flows be exercised without a database or a UI.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use super::{FormHost, RecipeStore};
use crate::models::{Recipe, RecipeId};

/// A persistence collaborator with a canned answer.
#[derive(Debug, Default)]
pub struct FakeRecipeStore {
    /// Message to reject with; `None` accepts every request
    rejection: Option<String>,
    /// When set, each request waits for a notification before answering
    gate: Option<Arc<Notify>>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    received: Mutex<Vec<Recipe>>,
}

impl FakeRecipeStore {
    /// A store that accepts every request and echoes the payload back.
    pub fn accepting() -> Self {
        Self::default()
    }

    /// A store that rejects every request with `message`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            rejection: Some(message.into()),
            ..Self::default()
        }
    }

    /// Holds every request until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Payloads received so far, in call order.
    pub async fn received(&self) -> Vec<Recipe> {
        self.received.lock().await.clone()
    }

    async fn answer(&self, recipe: Recipe) -> anyhow::Result<Recipe> {
        self.received.lock().await.push(recipe.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.rejection {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(recipe),
        }
    }
}

#[async_trait]
impl RecipeStore for FakeRecipeStore {
    async fn create(&self, recipe: Recipe) -> anyhow::Result<Recipe> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(recipe).await
    }

    async fn update(&self, id: RecipeId, recipe: Recipe) -> anyhow::Result<Recipe> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if id != recipe.id {
            return Err(anyhow!("Recipe ID mismatch: {id} != {}", recipe.id));
        }
        self.answer(recipe).await
    }
}

/// A form host that counts the signals it receives.
#[derive(Debug, Default)]
pub struct RecordingHost {
    closes: AtomicUsize,
    refreshes: AtomicUsize,
}

impl RecordingHost {
    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl FormHost for RecordingHost {
    fn close_form(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }

    fn refresh_recipes(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}
