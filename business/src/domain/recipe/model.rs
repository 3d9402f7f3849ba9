use super::errors::RecipeError;

/// Name of the dish or drink the user asked a recipe for.
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, RecipeError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RecipeError::ItemNameEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a single generation request.
///
/// Failures are carried as data so the presentation layer decides how to
/// show them.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeOutcome {
    Generated { item_name: ItemName, text: String },
    Failed { item_name: ItemName, reason: RecipeError },
}

impl RecipeOutcome {
    pub fn item_name(&self) -> &ItemName {
        match self {
            RecipeOutcome::Generated { item_name, .. } => item_name,
            RecipeOutcome::Failed { item_name, .. } => item_name,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, RecipeOutcome::Generated { .. })
    }
}
