use tera::{Context, Tera};

use business::domain::recipe::model::RecipeOutcome;

const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");
const RECIPE_TEMPLATE: &str = include_str!("../../../templates/recipe.html");

/// Shown in place of the recipe when generation failed.
pub const FAILURE_SENTINEL: &str =
    "Sorry, the recipe could not be generated. Please try again later.";

/// Returned as-is when the form carries no usable item name.
pub const NO_ITEM_NAME_PAGE: &str = r#"<p>No item name was provided.</p><a href="/">Back</a>"#;

/// Whether interpolated values are HTML-escaped.
///
/// `Raw` inserts the item name and the generated text verbatim, which lets
/// markup in either reach the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Raw,
    Escaped,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(RenderMode::Raw),
            "escaped" => Ok(RenderMode::Escaped),
            _ => Err(format!("Invalid render mode: {}", s)),
        }
    }
}

/// View model of the result page.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipePage {
    pub item_name: String,
    pub text: String,
}

impl RecipePage {
    /// A failed generation renders as the fixed sentinel text.
    pub fn from_outcome(outcome: &RecipeOutcome) -> Self {
        let text = match outcome {
            RecipeOutcome::Generated { text, .. } => text.clone(),
            RecipeOutcome::Failed { .. } => FAILURE_SENTINEL.to_string(),
        };

        Self {
            item_name: outcome.item_name().to_string(),
            text,
        }
    }
}

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new(mode: RenderMode) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("index.html", INDEX_TEMPLATE),
            ("recipe.html", RECIPE_TEMPLATE),
        ])?;

        // Tera escapes .html templates unless told otherwise.
        if mode == RenderMode::Raw {
            tera.autoescape_on(vec![]);
        }

        Ok(Self { tera })
    }

    pub fn index(&self) -> Result<String, tera::Error> {
        self.tera.render("index.html", &Context::new())
    }

    pub fn recipe(&self, page: &RecipePage) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("item_name", &page.item_name);
        context.insert("text", &page.text);
        self.tera.render("recipe.html", &context)
    }
}
