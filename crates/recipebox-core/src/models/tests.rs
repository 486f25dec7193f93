#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::{
        display::{LocalDateTime, RecipeCard},
        models::{Direction, FormMode, Ingredient, Recipe, RecipeId, RecipeImages, Special},
        specials::SpecialsSnapshot,
    };

    fn create_test_recipe() -> Recipe {
        Recipe {
            id: RecipeId::generate(),
            title: "Crispy Chicken and Rice".to_string(),
            description: "Weeknight favorite".to_string(),
            images: RecipeImages::default(),
            servings: 4,
            prep_time: 15,
            cook_time: 35,
            post_date: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            edit_date: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
            ingredients: vec![
                Ingredient::new(1.5, "cups", "Rice"),
                Ingredient::new(2.0, "", "Chicken thighs"),
            ],
            directions: vec![
                Direction::new("Rinse the rice", false),
                Direction::new("Garnish with cilantro", true),
            ],
        }
    }

    #[test]
    fn test_recipe_serializes_with_service_field_names() {
        let recipe = create_test_recipe();
        let value = serde_json::to_value(&recipe).unwrap();

        assert_eq!(value["uuid"], json!(recipe.id.to_string()));
        assert_eq!(value["prepTime"], json!(15));
        assert_eq!(value["cookTime"], json!(35));
        assert!(value.get("postDate").is_some());
        assert!(value.get("editDate").is_some());
        assert_eq!(value["ingredients"][0]["uuid"], json!(recipe.ingredients[0].id.to_string()));
        assert_eq!(value["ingredients"][0]["amount"], json!(1.5));
        assert_eq!(value["directions"][1]["optional"], json!(true));
        assert!(value.get("prep_time").is_none());
    }

    #[test]
    fn test_recipe_serde_preserves_identity() {
        let recipe = create_test_recipe();
        let text = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, recipe);
    }

    #[test]
    fn test_direction_without_uuid_gets_generated_one() {
        let first: Direction =
            serde_json::from_value(json!({ "instructions": "Boil water" })).unwrap();
        let second: Direction =
            serde_json::from_value(json!({ "instructions": "Boil water" })).unwrap();

        assert_eq!(first.instructions, "Boil water");
        assert!(!first.optional);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_recipe_missing_lists_deserialize_empty() {
        let recipe = create_test_recipe();
        let mut value = serde_json::to_value(&recipe).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("ingredients");
        object.remove("directions");
        object.remove("images");

        let parsed: Recipe = serde_json::from_value(value).unwrap();
        assert!(parsed.ingredients.is_empty());
        assert!(parsed.directions.is_empty());
        assert_eq!(parsed.images, RecipeImages::default());
    }

    #[test]
    fn test_special_wire_names() {
        let ingredient = Ingredient::new(1.0, "lb", "Chicken");
        let special: Special = serde_json::from_value(json!({
            "uuid": "8d8bc1d2-8b54-4c6b-9f4a-3f2a7b1e0c55",
            "ingredientId": ingredient.id.to_string(),
            "type": "promocode",
            "title": "20% off",
            "text": "Use code CHICKEN20"
        }))
        .unwrap();

        assert_eq!(special.ingredient_id, ingredient.id);
        assert_eq!(special.kind, "promocode");
        assert_eq!(special.text, "Use code CHICKEN20");
    }

    #[test]
    fn test_form_mode_parsing() {
        assert_eq!("create".parse::<FormMode>().unwrap(), FormMode::Create);
        assert_eq!("EDIT".parse::<FormMode>().unwrap(), FormMode::Edit);
        assert!("delete".parse::<FormMode>().is_err());
        assert_eq!(FormMode::Edit.to_string(), "edit");
        assert_eq!(FormMode::Create.dialog_title(), "Create Recipe");
        assert_eq!(FormMode::Edit.success_message(), "Recipe updated successfully!");
    }

    #[test]
    fn test_recipe_display() {
        let recipe = create_test_recipe();
        let output = format!("{}", recipe);

        assert!(output.starts_with("# Crispy Chicken and Rice\n"));
        assert!(output.contains("Weeknight favorite"));
        assert!(output.contains(&format!("- ID: {}", recipe.id)));
        assert!(output.contains(&format!("- Posted: {}", LocalDateTime(&recipe.post_date))));
        assert!(output.contains(&format!("- Edited: {}", LocalDateTime(&recipe.edit_date))));
        assert!(output.contains("- Servings: 4"));
        assert!(output.contains("- Prep time: 15 minutes"));
        assert!(output.contains("- Cook time: 35 minutes"));
        assert!(output.contains("## Ingredients"));
        assert!(output.contains("- 1 1/2 cups Rice"));
        assert!(output.contains("- 2 Chicken thighs"));
        assert!(output.contains("## Directions"));
        assert!(output.contains("### Step 1:\n\nRinse the rice"));
        assert!(output.contains("### Step 2:\n\n_Optional_\n\nGarnish with cilantro"));
    }

    #[test]
    fn test_recipe_display_unedited_and_empty() {
        let mut recipe = create_test_recipe();
        recipe.edit_date = recipe.post_date;
        recipe.ingredients.clear();
        recipe.directions.clear();
        let output = format!("{}", recipe);

        assert!(!output.contains("- Edited:"));
        assert!(output.contains("No ingredients listed."));
        assert!(output.contains("No directions yet."));
    }

    #[test]
    fn test_recipe_card_attaches_specials() {
        let recipe = create_test_recipe();
        let rice = &recipe.ingredients[0];
        let specials = SpecialsSnapshot::new(vec![Special {
            id: uuid::Uuid::new_v4(),
            ingredient_id: rice.id,
            title: "Half off".to_string(),
            kind: "local".to_string(),
            text: "This week only".to_string(),
        }]);

        let output = RecipeCard::new(&recipe, &specials).to_string();
        assert!(output.contains("- 1 1/2 cups Rice\n  Half off Local Deal!\n  This week only\n"));
        assert!(output.contains("- 2 Chicken thighs\n"));
        assert!(!output.contains("Chicken thighs\n  Half off"));
    }
}
