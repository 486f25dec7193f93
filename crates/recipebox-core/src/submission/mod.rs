//! Submitting drafts to the persistence collaborator.
//!
//! [`SubmissionController`] drives one form instance through
//!
//! ```text
//!                     ┌──────────────▶ Succeeded ──(close delay)──▶ close form + refresh list
//! Idle ──submit──▶ Submitting
//!   ▲                 └──────────────▶ Failed ──submit (retry)──▶ Submitting
//!   └── new controller per opened form
//! ```
//!
//! Only one request is ever in flight per controller: a submit issued while
//! another is running is ignored. Both terminal states carry a single
//! [`Alert`] for the user. The draft is never modified by the controller, so
//! a failed submission can be retried as is.
//!
//! The persistence collaborator ([`RecipeStore`]) and the surrounding UI
//! ([`FormHost`]) are traits so that the controller can be driven by the
//! local [`Cookbook`](crate::Cookbook), a remote service or test doubles.

pub mod testing;


use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::sync::watch;

use crate::{
    draft::RecipeDraft,
    error::{RecipeError, Result},
    models::{FormMode, Recipe, RecipeId},
};

/// Delay between a successful submission and closing the form.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Persistence collaborator receiving submitted recipes.
///
/// Errors are reported as [`anyhow::Error`]; their top-level message is shown
/// to the user verbatim.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persists a new recipe and returns the stored version.
    async fn create(&self, recipe: Recipe) -> anyhow::Result<Recipe>;

    /// Replaces the recipe identified by `id` and returns the stored version.
    async fn update(&self, id: RecipeId, recipe: Recipe) -> anyhow::Result<Recipe>;
}

/// The UI surrounding a form.
pub trait FormHost: Send + Sync {
    /// Close the form that submitted the draft.
    fn close_form(&self);

    /// Ask the recipe list to fetch its contents again.
    fn refresh_recipes(&self);
}

/// Severity of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Error,
}

/// The single message shown to the user once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Error,
            message: message.into(),
        }
    }
}

/// State of a form's submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// Nothing submitted yet
    Idle,
    /// A request is in flight; the draft should be treated as locked
    Submitting,
    /// The collaborator accepted the recipe
    Succeeded { alert: Alert, recipe: Recipe },
    /// The collaborator rejected the recipe
    Failed { alert: Alert },
}

impl SubmissionState {
    /// Alert to display, if the submission has settled.
    pub fn alert(&self) -> Option<&Alert> {
        match self {
            SubmissionState::Succeeded { alert, .. } | SubmissionState::Failed { alert } => {
                Some(alert)
            }
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded { .. } => "succeeded",
            SubmissionState::Failed { .. } => "failed",
        }
    }

    /// Whether a new submission may start from this state.
    fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed { .. })
    }
}

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The collaborator accepted the recipe
    Succeeded(Recipe),
    /// The collaborator rejected the recipe with this message
    Failed(String),
    /// Another submission was in flight or had already succeeded
    Ignored,
}

impl SubmitOutcome {
    /// Converts a rejection into `RecipeError::SubmissionFailed`.
    pub fn into_result(self) -> Result<Option<Recipe>> {
        match self {
            SubmitOutcome::Succeeded(recipe) => Ok(Some(recipe)),
            SubmitOutcome::Failed(message) => Err(RecipeError::SubmissionFailed { message }),
            SubmitOutcome::Ignored => Ok(None),
        }
    }
}

/// Timing settings for a [`SubmissionController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionConfig {
    /// How long the success alert stays up before the form closes
    pub close_delay: Duration,
    /// Upper bound on a single request; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            close_delay: DEFAULT_CLOSE_DELAY,
            timeout: None,
        }
    }
}

impl SubmissionConfig {
    /// Closes the form as soon as the collaborator answers.
    pub fn immediate() -> Self {
        Self {
            close_delay: Duration::ZERO,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// State machine submitting one form's draft.
pub struct SubmissionController {
    store: Arc<dyn RecipeStore>,
    host: Arc<dyn FormHost>,
    config: SubmissionConfig,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionController {
    /// Creates a controller in the `Idle` state with default timings.
    pub fn new(store: Arc<dyn RecipeStore>, host: Arc<dyn FormHost>) -> Self {
        Self::with_config(store, host, SubmissionConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn RecipeStore>,
        host: Arc<dyn FormHost>,
        config: SubmissionConfig,
    ) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            store,
            host,
            config,
            state,
        }
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Submits `draft` through the persistence collaborator.
    ///
    /// Create-mode drafts go to [`RecipeStore::create`], edit-mode drafts to
    /// [`RecipeStore::update`]. On success the controller waits for the
    /// configured close delay, then asks the host to close the form and
    /// refresh the recipe list, once each.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` when the draft fails validation;
    /// the state is left unchanged and nothing is sent. Rejections by the
    /// collaborator are not errors: they settle in
    /// [`SubmissionState::Failed`] and are reported as
    /// [`SubmitOutcome::Failed`].
    pub async fn submit(&self, draft: &RecipeDraft) -> Result<SubmitOutcome> {
        draft.validate()?;

        let started = self.state.send_if_modified(|state| {
            if state.accepts_submit() {
                *state = SubmissionState::Submitting;
                true
            } else {
                false
            }
        });
        if !started {
            debug!(
                "Ignoring submit for recipe {} while {}",
                draft.recipe().id,
                self.state.borrow().as_str()
            );
            return Ok(SubmitOutcome::Ignored);
        }

        let mode = draft.mode();
        let payload = draft.payload();
        let id = payload.id;
        info!("Submitting recipe {id} ({})", mode.as_str());

        match self.dispatch(mode, id, payload).await {
            Ok(saved) => {
                info!("Recipe {id} saved");
                self.state.send_replace(SubmissionState::Succeeded {
                    alert: Alert::success(mode.success_message()),
                    recipe: saved.clone(),
                });

                if !self.config.close_delay.is_zero() {
                    tokio::time::sleep(self.config.close_delay).await;
                }
                self.host.close_form();
                self.host.refresh_recipes();

                Ok(SubmitOutcome::Succeeded(saved))
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Submission of recipe {id} failed: {message}");
                self.state.send_replace(SubmissionState::Failed {
                    alert: Alert::error(message.clone()),
                });
                Ok(SubmitOutcome::Failed(message))
            }
        }
    }

    async fn dispatch(&self, mode: FormMode, id: RecipeId, payload: Recipe) -> anyhow::Result<Recipe> {
        let request = async {
            match mode {
                FormMode::Create => self.store.create(payload).await,
                FormMode::Edit => self.store.update(id, payload).await,
            }
        };

        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .unwrap_or_else(|_| {
                    Err(anyhow!("Request timed out after {} ms", limit.as_millis()))
                }),
            None => request.await,
        }
    }
}
