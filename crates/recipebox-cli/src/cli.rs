//! Command handlers for the recipebox CLI.
//!
//! Each `recipe create` / `recipe edit` invocation plays the part of one open
//! recipe form: it seeds a [`RecipeDraft`], applies the requested list and
//! field edits, and submits it through a [`SubmissionController`]. The
//! terminal stands in for the form host, so a successful save prints the
//! alert, "closes" the form and shows the refreshed recipe list.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use anyhow::{anyhow, Context, Result};
use log::info;
use recipebox_core::{
    draft::resolve_position, params::NewSpecial, Alert, Cookbook, FormHost, QuantityFormatter,
    RecipeCard, RecipeDraft, RecipeId, RecipeSummaries, SubmissionConfig, SubmissionController,
    SubmitOutcome,
};

use crate::{
    args::{
        AddSpecialArgs, CreateRecipeArgs, EditRecipeArgs, FormArgs, FormatArgs, RecipeCommands,
        SpecialCommands,
    },
    renderer::TerminalRenderer,
};

/// The terminal acting as the host of a recipe form.
#[derive(Debug, Default)]
pub struct TerminalHost {
    closed: AtomicBool,
    refresh_requested: AtomicBool,
}

impl TerminalHost {
    /// Whether the form was closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Returns and clears a pending list refresh.
    pub fn take_refresh(&self) -> bool {
        self.refresh_requested.swap(false, Ordering::SeqCst)
    }
}

impl FormHost for TerminalHost {
    fn close_form(&self) {
        info!("Recipe form closed");
        self.closed.store(true, Ordering::SeqCst);
    }

    fn refresh_recipes(&self) {
        self.refresh_requested.store(true, Ordering::SeqCst);
    }
}

/// Main CLI handler.
pub struct Cli {
    cookbook: Arc<Cookbook>,
    renderer: TerminalRenderer,
    submission: SubmissionConfig,
}

impl Cli {
    pub fn new(cookbook: Cookbook, renderer: TerminalRenderer, submission: SubmissionConfig) -> Self {
        Self {
            cookbook: Arc::new(cookbook),
            renderer,
            submission,
        }
    }

    /// Builds the submission settings from the global flags.
    pub fn submission_config(close_delay_ms: u64, timeout_ms: Option<u64>) -> SubmissionConfig {
        SubmissionConfig {
            close_delay: Duration::from_millis(close_delay_ms),
            timeout: timeout_ms.map(Duration::from_millis),
        }
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::List => self.list_recipes().await,
            RecipeCommands::Show(args) => self.show_recipe(args.id).await,
            RecipeCommands::Create(args) => self.create_recipe(args).await,
            RecipeCommands::Edit(args) => self.edit_recipe(args).await,
            RecipeCommands::Delete(args) => self.delete_recipe(args.id).await,
        }
    }

    pub async fn handle_special_command(&self, command: SpecialCommands) -> Result<()> {
        match command {
            SpecialCommands::Add(args) => self.add_special(args).await,
            SpecialCommands::List => self.list_specials().await,
            SpecialCommands::Delete(args) => {
                if self.cookbook.delete_special(args.id).await? {
                    self.renderer
                        .render_alert(&Alert::success(format!("Deleted special {}", args.id)))
                } else {
                    Err(anyhow!("Special with ID {} not found", args.id))
                }
            }
        }
    }

    pub fn format_amount(&self, args: FormatArgs) -> Result<()> {
        let formatted = QuantityFormatter::new(args.max_denominator).format(args.amount)?;
        println!("{formatted}");
        Ok(())
    }

    pub async fn list_recipes(&self) -> Result<()> {
        let recipes = self
            .cookbook
            .list_recipes()
            .await
            .context("Failed to list recipes")?;
        self.renderer.render(&RecipeSummaries(recipes).to_string())
    }

    async fn show_recipe(&self, id: RecipeId) -> Result<()> {
        let recipe = self
            .cookbook
            .get_recipe(id)
            .await?
            .ok_or_else(|| anyhow!("Recipe with ID {id} not found"))?;
        let specials = self.cookbook.specials_snapshot().await;

        self.renderer
            .render(&RecipeCard::new(&recipe, &specials).to_string())
    }

    async fn create_recipe(&self, args: CreateRecipeArgs) -> Result<()> {
        let mut draft = RecipeDraft::new_recipe()?;
        apply_form(&mut draft, &args.form)?;
        self.submit(draft).await
    }

    async fn edit_recipe(&self, args: EditRecipeArgs) -> Result<()> {
        let recipe = self
            .cookbook
            .get_recipe(args.id)
            .await?
            .ok_or_else(|| anyhow!("Recipe with ID {} not found", args.id))?;
        let mut draft = RecipeDraft::edit(&recipe)?;

        for position in args.remove_ingredient {
            let mut ingredients = draft.ingredients();
            let index = resolve_position("ingredients", position, ingredients.len())?;
            ingredients.remove_at(index)?;
        }
        for position in args.remove_direction {
            let mut directions = draft.directions();
            let index = resolve_position("directions", position, directions.len())?;
            directions.remove_at(index)?;
        }

        apply_form(&mut draft, &args.form)?;
        self.submit(draft).await
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<()> {
        if !self.cookbook.delete_recipe(id).await? {
            return Err(anyhow!("Recipe with ID {id} not found"));
        }
        self.renderer
            .render_alert(&Alert::success(format!("Deleted recipe {id}")))
    }

    /// Submits a draft the way a form does and reports the outcome.
    async fn submit(&self, draft: RecipeDraft) -> Result<()> {
        let host = Arc::new(TerminalHost::default());
        let controller = SubmissionController::with_config(
            self.cookbook.clone(),
            host.clone(),
            self.submission,
        );

        info!("{}", draft.mode().dialog_title());
        let outcome = controller.submit(&draft).await?;
        if let SubmitOutcome::Succeeded(recipe) = &outcome {
            if let Some(alert) = controller.state().alert() {
                self.renderer.render_alert(alert)?;
            }
            self.renderer.render(&format!("{recipe}"))?;
        }
        outcome.into_result()?;

        if host.is_closed() && host.take_refresh() {
            self.list_recipes().await?;
        }
        Ok(())
    }

    async fn add_special(&self, args: AddSpecialArgs) -> Result<()> {
        let special = NewSpecial::from(args).into_special()?;
        let stored = self.cookbook.add_special(special).await?;

        self.renderer.render_alert(&Alert::success(format!(
            "Added special {}: {}",
            stored.id,
            stored.headline()
        )))
    }

    async fn list_specials(&self) -> Result<()> {
        let specials = self.cookbook.list_specials().await?;
        if specials.is_empty() {
            return self.renderer.render("No specials found.\n");
        }

        let mut markdown = String::new();
        for special in &specials {
            markdown.push_str(&format!(
                "- **{}** ({}) for ingredient {}: {}\n",
                special.headline(),
                special.id,
                special.ingredient_id,
                special.text
            ));
        }
        self.renderer.render(&markdown)
    }
}

/// Appends template items, then applies field assignments in order.
fn apply_form(draft: &mut RecipeDraft, form: &FormArgs) -> Result<()> {
    for _ in 0..form.add_ingredient {
        draft.ingredients().append_template();
    }
    for _ in 0..form.add_direction {
        draft.directions().append_template();
    }
    for edit in &form.edits {
        draft.apply(edit)?;
    }
    Ok(())
}
