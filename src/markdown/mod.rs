//! Markdown rendering of a single recipe.
//!
//! The document has a frontmatter block, the title, the author comment, the
//! cover image and three sections: ingredients, instructions and notes.

mod frontmatter;
mod ingredients;

pub use frontmatter::{
    build_frontmatter, recipe_url, visible_tags, AUTHOR, IGNORED_TAG_PREFIXES, SERVINGS,
};
pub use ingredients::{
    format_ingredient, format_quantity, group_ingredients, render_groups, IngredientGroup,
};

use crate::localization::Localizer;
use crate::model::Recipe;
use crate::text::substitute_timers;
use chrono::{Local, NaiveDate};
use log::debug;

/// Title used when a recipe has no text in any locale
pub const FALLBACK_TITLE: &str = "recipe";

/// Steps with this title only list the mise en place and are not rendered
pub const SKIPPED_STEP_TITLE: &str = "Alles parat?";

const IMAGE_ALT_TEXT: &str = "Rezeptbild";

#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    api_key: String,
    date: NaiveDate,
    localizer: Localizer,
}

impl MarkdownRenderer {
    /// Creates a renderer that stamps documents with today's date
    pub fn new(api_key: impl Into<String>) -> Self {
        MarkdownRenderer {
            api_key: api_key.into(),
            date: Local::now().date_naive(),
            localizer: Localizer::default(),
        }
    }

    /// Use a fixed date instead of today
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_localizer(mut self, localizer: Localizer) -> Self {
        self.localizer = localizer;
        self
    }

    /// Best available title, or [`FALLBACK_TITLE`]
    pub fn title<'a>(&self, recipe: &'a Recipe) -> &'a str {
        self.localizer
            .text(&recipe.localized_title)
            .unwrap_or(FALLBACK_TITLE)
    }

    pub fn render(&self, recipe: &Recipe) -> String {
        debug!("Rendering recipe {}", recipe.id.oid);

        let mut lines = build_frontmatter(recipe, self.date);

        lines.push(format!("# {}", self.title(recipe)));
        lines.push(String::new());

        if let Some(comment) = self.localizer.text(&recipe.author_comment) {
            lines.push(comment.to_string());
            lines.push(String::new());
        }

        if let Some(url) = recipe.cover_image_url(&self.api_key) {
            lines.push(format!("![{IMAGE_ALT_TEXT}]({url})"));
            lines.push(String::new());
        }

        lines.push("### Zutaten".to_string());
        lines.push(String::new());
        lines.extend(self.ingredient_lines(recipe));

        lines.push("### Zubereitung".to_string());
        lines.push(String::new());
        lines.extend(self.step_lines(recipe));
        lines.push(String::new());

        lines.push("### Notizen / Empfehlungen".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    /// Grouped ingredient bullets. Each group ends with a blank line; without
    /// any printable ingredient a single empty bullet is emitted instead.
    fn ingredient_lines(&self, recipe: &Recipe) -> Vec<String> {
        let groups = group_ingredients(&recipe.ingredients, &self.localizer);
        let lines = render_groups(&groups, f64::from(SERVINGS), &self.localizer);
        if lines.iter().all(|line| line.is_empty()) {
            return vec!["- ".to_string(), String::new()];
        }
        lines
    }

    fn step_lines(&self, recipe: &Recipe) -> Vec<String> {
        recipe
            .steps
            .iter()
            .filter_map(|step| {
                let text = self.localizer.text(&step.title).unwrap_or_default();
                if text == SKIPPED_STEP_TITLE {
                    return None;
                }
                let text = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
                Some(format!("- {}", substitute_timers(step, &text)))
            })
            .collect()
    }
}
