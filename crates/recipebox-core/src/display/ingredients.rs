//! Presentation of a single ingredient.

use std::fmt;

use crate::{
    models::{Ingredient, Special},
    quantity::QuantityFormatter,
};

/// An ingredient as shown on a recipe card.
///
/// The first line reads `"<quantity> <measurement> <name>"`. When a special
/// applies, its headline and its text follow on their own lines.
pub struct IngredientLine<'a> {
    pub ingredient: &'a Ingredient,
    pub special: Option<&'a Special>,
    formatter: QuantityFormatter,
}

impl<'a> IngredientLine<'a> {
    pub fn new(
        ingredient: &'a Ingredient,
        special: Option<&'a Special>,
        formatter: QuantityFormatter,
    ) -> Self {
        Self {
            ingredient,
            special,
            formatter,
        }
    }

    /// Kitchen-style quantity. Amounts the formatter rejects (negative or
    /// non-finite) are shown as the raw number.
    pub fn quantity(&self) -> String {
        self.formatter
            .format(self.ingredient.amount)
            .unwrap_or_else(|_| self.ingredient.amount.to_string())
    }

    /// The first line, without specials.
    pub fn primary(&self) -> String {
        [
            self.quantity().as_str(),
            self.ingredient.measurement.trim(),
            self.ingredient.name.trim(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl fmt::Display for IngredientLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.primary())?;

        if let Some(special) = self.special {
            writeln!(f, "{}", special.headline())?;
            if !special.text.is_empty() {
                writeln!(f, "{}", special.text)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn special_for(ingredient: &Ingredient) -> Special {
        Special {
            id: Uuid::new_v4(),
            ingredient_id: ingredient.id,
            title: "Half off".to_string(),
            kind: "local".to_string(),
            text: "Only at the corner store".to_string(),
        }
    }

    #[test]
    fn test_primary_line_uses_fractions() {
        let flour = Ingredient::new(2.25, "cups", "Flour");
        let line = IngredientLine::new(&flour, None, QuantityFormatter::default());
        assert_eq!(line.to_string(), "2 1/4 cups Flour\n");
    }

    #[test]
    fn test_primary_line_skips_empty_measurement() {
        let eggs = Ingredient::new(3.0, "", "Eggs");
        let line = IngredientLine::new(&eggs, None, QuantityFormatter::default());
        assert_eq!(line.primary(), "3 Eggs");
    }

    #[test]
    fn test_special_lines_follow_primary() {
        let butter = Ingredient::new(0.5, "cup", "Butter");
        let special = special_for(&butter);
        let line = IngredientLine::new(&butter, Some(&special), QuantityFormatter::default());

        assert_eq!(
            line.to_string(),
            "1/2 cup Butter\nHalf off Local Deal!\nOnly at the corner store\n"
        );
    }

    #[test]
    fn test_invalid_amount_falls_back_to_raw_number() {
        let odd = Ingredient::new(-1.5, "cup", "Water");
        let line = IngredientLine::new(&odd, None, QuantityFormatter::default());
        assert_eq!(line.primary(), "-1.5 cup Water");
    }
}
