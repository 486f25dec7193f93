//! Direction model definition.

use serde::{Deserialize, Serialize};

use super::DirectionId;

/// A single preparation step.
///
/// Records stored before directions carried identifiers deserialize with a
/// freshly generated one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Direction {
    /// Synthetic identifier used as the rendering and removal key
    #[serde(rename = "uuid", default = "DirectionId::generate")]
    pub id: DirectionId,

    /// What to do in this step
    pub instructions: String,

    /// Whether the step may be skipped
    #[serde(default)]
    pub optional: bool,
}

impl Direction {
    /// Creates a direction with a freshly generated identifier.
    pub fn new(instructions: impl Into<String>, optional: bool) -> Self {
        Self {
            id: DirectionId::generate(),
            instructions: instructions.into(),
            optional,
        }
    }
}
