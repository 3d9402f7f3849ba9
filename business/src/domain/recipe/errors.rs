/// Recipe generation errors.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.item_name_empty")]
    ItemNameEmpty,
    #[error("recipe.transport_error")]
    Transport,
    #[error("recipe.unauthorized")]
    Unauthorized,
    #[error("recipe.quota_exceeded")]
    QuotaExceeded,
    #[error("recipe.upstream_error: {0}")]
    Upstream(u16),
    #[error("recipe.malformed_response")]
    MalformedResponse,
}
