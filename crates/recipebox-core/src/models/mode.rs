//! Form mode enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a form creates a new recipe or edits an existing one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    /// Draft seeded from the template; submitted with `create`
    Create,

    /// Draft copied from an existing recipe; submitted with `update`
    Edit,
}

impl FromStr for FormMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(FormMode::Create),
            "edit" => Ok(FormMode::Edit),
            _ => Err(format!("Invalid form mode: {s}")),
        }
    }
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Edit => "edit",
        }
    }

    /// Title shown at the top of the form dialog.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Recipe",
            FormMode::Edit => "Edit Recipe",
        }
    }

    /// Alert text shown after the collaborator accepts the submission.
    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Recipe created successfully!",
            FormMode::Edit => "Recipe updated successfully!",
        }
    }
}
