mod common;

use std::sync::Arc;

use common::create_test_cookbook;
use recipebox_core::{
    submission::testing::RecordingHost, Database, FormMode, NewSpecial, RecipeCard, RecipeDraft,
    RecipeError, RecipeId, SubmissionConfig, SubmissionController, SubmissionState,
    SubmitOutcome,
};

#[tokio::test]
async fn test_recipe_round_trip() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;

    let mut draft = RecipeDraft::new_recipe().unwrap();
    draft.set_field("title", "Banana Bread").unwrap();
    draft.set_field("servings", "8").unwrap();
    draft.set_field("ingredients[0].amount", "2.5").unwrap();
    draft.set_field("ingredients[0].name", "Flour").unwrap();
    draft.directions().append_template();
    let payload = draft.into_recipe();

    let stored = cookbook.create_recipe(payload.clone()).await.unwrap();
    assert_eq!(stored.id, payload.id);
    assert_eq!(stored.post_date, stored.edit_date);

    let fetched = cookbook.get_recipe(stored.id).await.unwrap().unwrap();
    assert_eq!(fetched, stored);
    assert_eq!(fetched.ingredients[0].name, "Flour");
    assert_eq!(fetched.directions.len(), 2);
    assert_eq!(fetched.ingredients[0].id, payload.ingredients[0].id);
    assert_eq!(fetched.directions[1].id, payload.directions[1].id);
}

#[tokio::test]
async fn test_update_keeps_post_date() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;

    let stored = cookbook
        .create_recipe(RecipeDraft::new_recipe().unwrap().into_recipe())
        .await
        .unwrap();

    let mut draft = RecipeDraft::edit(&stored).unwrap();
    draft.set_field("title", "Renamed").unwrap();
    let updated = cookbook
        .update_recipe(stored.id, draft.into_recipe())
        .await
        .unwrap();

    assert_eq!(updated.post_date, stored.post_date);
    assert!(updated.edit_date >= stored.edit_date);

    let fetched = cookbook.get_recipe(stored.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Renamed");
    assert_eq!(fetched.post_date, stored.post_date);
}

#[tokio::test]
async fn test_update_unknown_recipe_fails() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;

    let recipe = RecipeDraft::new_recipe().unwrap().into_recipe();
    let result = cookbook.update_recipe(recipe.id, recipe).await;
    assert!(matches!(result, Err(RecipeError::RecipeNotFound { .. })));
}

#[tokio::test]
async fn test_update_with_mismatched_id_fails() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;

    let recipe = RecipeDraft::new_recipe().unwrap().into_recipe();
    let result = cookbook.update_recipe(RecipeId::generate(), recipe).await;
    assert!(matches!(result, Err(RecipeError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_list_and_delete_recipes() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;
    assert!(cookbook.list_recipes().await.unwrap().is_empty());

    let mut first = RecipeDraft::new_recipe().unwrap();
    first.set_field("title", "First").unwrap();
    let first = cookbook.create_recipe(first.into_recipe()).await.unwrap();

    let mut second = RecipeDraft::new_recipe().unwrap();
    second.set_field("title", "Second").unwrap();
    let second = cookbook.create_recipe(second.into_recipe()).await.unwrap();

    let titles: Vec<_> = cookbook
        .list_recipes()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);

    assert!(cookbook.delete_recipe(first.id).await.unwrap());
    assert!(!cookbook.delete_recipe(first.id).await.unwrap());

    let remaining = cookbook.list_recipes().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[tokio::test]
async fn test_submission_against_cookbook() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;
    let cookbook = Arc::new(cookbook);
    let host = Arc::new(RecordingHost::default());

    let mut draft = RecipeDraft::new_recipe().unwrap();
    draft.set_field("title", "Crispy Chicken").unwrap();
    let controller = SubmissionController::with_config(
        cookbook.clone(),
        host.clone(),
        SubmissionConfig::immediate(),
    );

    let outcome = controller.submit(&draft).await.unwrap();
    let created = match outcome {
        SubmitOutcome::Succeeded(recipe) => recipe,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(
        controller.state().alert().unwrap().message,
        FormMode::Create.success_message()
    );
    assert_eq!(host.closes(), 1);
    assert_eq!(host.refreshes(), 1);

    // Edit the stored recipe through a fresh form
    let mut edit = RecipeDraft::edit(&created).unwrap();
    edit.set_field("cookTime", "45").unwrap();
    let controller = SubmissionController::with_config(
        cookbook.clone(),
        host.clone(),
        SubmissionConfig::immediate(),
    );
    let updated = controller.submit(&edit).await.unwrap().into_result().unwrap().unwrap();

    assert_eq!(updated.cook_time, 45);
    assert_eq!(updated.post_date, created.post_date);
    assert_eq!(host.closes(), 2);
    assert_eq!(cookbook.list_recipes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_submission_of_deleted_recipe_surfaces_error() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;
    let cookbook = Arc::new(cookbook);
    let host = Arc::new(RecordingHost::default());

    let stored = cookbook
        .create_recipe(RecipeDraft::new_recipe().unwrap().into_recipe())
        .await
        .unwrap();
    let draft = RecipeDraft::edit(&stored).unwrap();
    cookbook.delete_recipe(stored.id).await.unwrap();

    let controller =
        SubmissionController::with_config(cookbook, host.clone(), SubmissionConfig::immediate());
    let outcome = controller.submit(&draft).await.unwrap();

    let expected = format!("Recipe with ID {} not found", stored.id);
    assert_eq!(outcome, SubmitOutcome::Failed(expected.clone()));
    assert!(matches!(
        controller.state(),
        SubmissionState::Failed { alert } if alert.message == expected
    ));
    assert_eq!(host.closes(), 0);
}

#[tokio::test]
async fn test_specials_annotate_recipe_card() {
    let (_temp_dir, cookbook) = create_test_cookbook().await;

    let mut draft = RecipeDraft::new_recipe().unwrap();
    draft.set_field("ingredients[0].amount", "0.5").unwrap();
    draft.set_field("ingredients[0].name", "Chicken").unwrap();
    let recipe = cookbook.create_recipe(draft.into_recipe()).await.unwrap();
    let chicken = recipe.ingredients[0].id;

    cookbook
        .add_special(
            NewSpecial {
                ingredient_id: chicken,
                title: "Half off".to_string(),
                kind: "local".to_string(),
                text: "At the corner store".to_string(),
            }
            .into_special()
            .unwrap(),
        )
        .await
        .unwrap();

    let specials = cookbook.specials_snapshot().await;
    assert_eq!(specials.len(), 1);

    let card = RecipeCard::new(&recipe, &specials).to_string();
    assert!(card.contains("- 1/2 cups Chicken\n  Half off Local Deal!\n  At the corner store\n"));
}

#[test]
fn test_database_reopens_existing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");

    let recipe = RecipeDraft::new_recipe().unwrap().into_recipe();
    {
        let db = Database::new(&db_path).unwrap();
        db.insert_recipe(&recipe).unwrap();
    }

    let db = Database::new(&db_path).unwrap();
    assert_eq!(db.get_recipe(recipe.id).unwrap(), Some(recipe.clone()));
    assert!(db.insert_recipe(&recipe).is_err());
}
