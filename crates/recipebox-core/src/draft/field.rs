//! Addressing and coercing scalar fields of a draft.
//!
//! Paths follow the form's field names:
//!
//! ```text
//! title | description | servings | prepTime | cookTime
//! images.full | images.medium | images.small
//! ingredients[<i>].amount | ingredients[<i>].measurement | ingredients[<i>].name
//! directions[<i>].instructions | directions[<i>].optional
//! ```

use std::{fmt, str::FromStr};

use crate::error::{RecipeError, Result};

/// One of the three image resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Full,
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    Amount,
    Measurement,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionField {
    Instructions,
    Optional,
}

/// Location of a scalar field inside a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Title,
    Description,
    Servings,
    PrepTime,
    CookTime,
    Image(ImageSize),
    Ingredient {
        position: usize,
        field: IngredientField,
    },
    Direction {
        position: usize,
        field: DirectionField,
    },
}

fn invalid_path(path: &str, reason: impl Into<String>) -> RecipeError {
    RecipeError::invalid_input(path).with_reason(reason)
}

/// Splits `ingredients[2]` into `("ingredients", 2)`.
fn split_indexed<'a>(path: &str, segment: &'a str) -> Result<(&'a str, Option<usize>)> {
    let Some((name, rest)) = segment.split_once('[') else {
        return Ok((segment, None));
    };
    let index = rest
        .strip_suffix(']')
        .ok_or_else(|| invalid_path(path, "unterminated index"))?;
    let position = index
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid_path(path, format!("'{index}' is not a valid position")))?;
    Ok((name, Some(position)))
}

impl FromStr for FieldPath {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        let path = s.trim();
        let (head, tail) = match path.split_once('.') {
            Some((head, tail)) => (head, Some(tail)),
            None => (path, None),
        };
        let (name, position) = split_indexed(path, head)?;

        match (name, position, tail) {
            ("title", None, None) => Ok(FieldPath::Title),
            ("description", None, None) => Ok(FieldPath::Description),
            ("servings", None, None) => Ok(FieldPath::Servings),
            ("prepTime", None, None) => Ok(FieldPath::PrepTime),
            ("cookTime", None, None) => Ok(FieldPath::CookTime),
            ("images", None, Some("full")) => Ok(FieldPath::Image(ImageSize::Full)),
            ("images", None, Some("medium")) => Ok(FieldPath::Image(ImageSize::Medium)),
            ("images", None, Some("small")) => Ok(FieldPath::Image(ImageSize::Small)),
            ("ingredients", Some(position), Some(field)) => {
                let field = match field {
                    "amount" => IngredientField::Amount,
                    "measurement" => IngredientField::Measurement,
                    "name" => IngredientField::Name,
                    other => return Err(invalid_path(path, format!("unknown ingredient field '{other}'"))),
                };
                Ok(FieldPath::Ingredient { position, field })
            }
            ("directions", Some(position), Some(field)) => {
                let field = match field {
                    "instructions" => DirectionField::Instructions,
                    "optional" => DirectionField::Optional,
                    other => return Err(invalid_path(path, format!("unknown direction field '{other}'"))),
                };
                Ok(FieldPath::Direction { position, field })
            }
            _ => Err(invalid_path(path, "unknown field path")),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Title => write!(f, "title"),
            FieldPath::Description => write!(f, "description"),
            FieldPath::Servings => write!(f, "servings"),
            FieldPath::PrepTime => write!(f, "prepTime"),
            FieldPath::CookTime => write!(f, "cookTime"),
            FieldPath::Image(ImageSize::Full) => write!(f, "images.full"),
            FieldPath::Image(ImageSize::Medium) => write!(f, "images.medium"),
            FieldPath::Image(ImageSize::Small) => write!(f, "images.small"),
            FieldPath::Ingredient { position, field } => {
                let field = match field {
                    IngredientField::Amount => "amount",
                    IngredientField::Measurement => "measurement",
                    IngredientField::Name => "name",
                };
                write!(f, "ingredients[{position}].{field}")
            }
            FieldPath::Direction { position, field } => {
                let field = match field {
                    DirectionField::Instructions => "instructions",
                    DirectionField::Optional => "optional",
                };
                write!(f, "directions[{position}].{field}")
            }
        }
    }
}

/// A `path=value` assignment, as typed on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub path: FieldPath,
    pub value: String,
}

impl FromStr for FieldEdit {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        let (path, value) = s
            .split_once('=')
            .ok_or_else(|| invalid_path(s, "expected PATH=VALUE"))?;
        Ok(FieldEdit {
            path: path.parse()?,
            value: value.to_string(),
        })
    }
}

/// Parses a whole number. Negative values are accepted here and rejected at
/// submission time.
pub(crate) fn coerce_integer(path: &FieldPath, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        RecipeError::invalid_input(path.to_string())
            .with_reason(format!("'{value}' is not a whole number"))
    })
}

pub(crate) fn coerce_number(path: &FieldPath, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        RecipeError::invalid_input(path.to_string()).with_reason(format!("'{value}' is not a number"))
    })
}

pub(crate) fn coerce_flag(path: &FieldPath, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(RecipeError::invalid_input(path.to_string())
            .with_reason(format!("'{value}' is not true or false"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_level_paths() {
        assert_eq!("title".parse::<FieldPath>().unwrap(), FieldPath::Title);
        assert_eq!("prepTime".parse::<FieldPath>().unwrap(), FieldPath::PrepTime);
        assert_eq!(
            "images.small".parse::<FieldPath>().unwrap(),
            FieldPath::Image(ImageSize::Small)
        );
    }

    #[test]
    fn test_parse_nested_paths() {
        assert_eq!(
            "ingredients[2].amount".parse::<FieldPath>().unwrap(),
            FieldPath::Ingredient {
                position: 2,
                field: IngredientField::Amount
            }
        );
        assert_eq!(
            "directions[0].optional".parse::<FieldPath>().unwrap(),
            FieldPath::Direction {
                position: 0,
                field: DirectionField::Optional
            }
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for path in ["servings", "images.full", "ingredients[10].name", "directions[3].instructions"] {
            assert_eq!(path.parse::<FieldPath>().unwrap().to_string(), path);
        }
    }

    #[test]
    fn test_rejects_malformed_paths() {
        for path in [
            "",
            "titel",
            "ingredients.amount",
            "ingredients[1]",
            "ingredients[-1].amount",
            "ingredients[x].amount",
            "ingredients[1.amount",
            "directions[0].title",
            "images.huge",
            "title[0]",
        ] {
            assert!(
                matches!(path.parse::<FieldPath>(), Err(RecipeError::InvalidInput { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_field_edit() {
        let edit: FieldEdit = "ingredients[0].name=Brown sugar".parse().unwrap();
        assert_eq!(edit.value, "Brown sugar");
        assert_eq!(
            edit.path,
            FieldPath::Ingredient {
                position: 0,
                field: IngredientField::Name
            }
        );

        // Only the first '=' separates path from value
        let edit: FieldEdit = "description=a=b".parse().unwrap();
        assert_eq!(edit.value, "a=b");

        assert!("title".parse::<FieldEdit>().is_err());
    }

    #[test]
    fn test_coercions() {
        let path = FieldPath::Servings;
        assert_eq!(coerce_integer(&path, " 4 ").unwrap(), 4);
        assert_eq!(coerce_integer(&path, "-2").unwrap(), -2);
        assert!(coerce_integer(&path, "2.5").is_err());
        assert!(coerce_integer(&path, "").is_err());
        assert_eq!(coerce_number(&path, "1.25").unwrap(), 1.25);
        assert!(coerce_number(&path, "lots").is_err());
        assert!(coerce_flag(&path, "Yes").unwrap());
        assert!(!coerce_flag(&path, "off").unwrap());
        assert!(coerce_flag(&path, "maybe").is_err());
    }
}
