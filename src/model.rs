use log::warn;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Image type marking the representative picture of a recipe
pub const COVER_IMAGE_TYPE: &str = "cover";

/// Text keyed by locale code, e.g. `{"de": "Nudeln", "en": "Noodles"}`.
///
/// Upstream data sometimes carries a bare string instead of a map; that is
/// stored under the empty locale key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLocalizedText")]
pub struct LocalizedText(BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLocalizedText {
    Plain(String),
    ByLocale(BTreeMap<String, Option<String>>),
}

impl From<RawLocalizedText> for LocalizedText {
    fn from(raw: RawLocalizedText) -> Self {
        match raw {
            RawLocalizedText::Plain(text) => LocalizedText::plain(text),
            RawLocalizedText::ByLocale(map) => map
                .into_iter()
                .filter_map(|(locale, text)| text.map(|t| (locale, t)))
                .collect(),
        }
    }
}

impl LocalizedText {
    /// Text without a locale tag
    pub fn plain(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(String::new(), text.into());
        LocalizedText(map)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|text| text.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LocalizedText(
            iter.into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
}

/// Mongo-style object id wrapper (`{"$oid": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeId {
    #[serde(rename = "$oid")]
    pub oid: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: RecipeId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub localized_title: LocalizedText,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_comment: LocalizedText,
    /// Minutes
    #[serde(default)]
    pub preparation_time: Option<u32>,
    /// Minutes
    #[serde(default)]
    pub cooking_time: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_list: Vec<Image>,
}

impl Recipe {
    /// Image shown at the top of the rendered recipe.
    ///
    /// The picture of the last step usually shows the finished dish, so it
    /// wins over the image list.
    pub fn cover_image(&self) -> Option<&Image> {
        self.steps
            .last()
            .and_then(|step| step.image.as_ref())
            .or_else(|| select_cover(&self.image_list))
    }

    /// URL of [`Recipe::cover_image`] authenticated with `api_key`
    pub fn cover_image_url(&self, api_key: &str) -> Option<String> {
        self.cover_image().map(|image| image.authenticated_url(api_key))
    }
}

/// Returns the single image typed as cover, or `None` when there are zero or
/// several candidates.
pub fn select_cover(image_list: &[Image]) -> Option<&Image> {
    let mut covers = image_list
        .iter()
        .filter(|image| image.kind.as_deref() == Some(COVER_IMAGE_TYPE));
    let first = covers.next()?;
    let others = covers.count();
    if others > 0 {
        warn!("Found {} cover images, ignoring all of them", others + 1);
        return None;
    }
    Some(first)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: LocalizedText,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    timers: Vec<Timer>,
}

impl Step {
    pub fn new(title: LocalizedText, image: Option<Image>, timers: Vec<Timer>) -> Self {
        Step {
            title,
            image,
            timers,
        }
    }

    /// Timers in the order their `<timer>` placeholders appear in the text
    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    /// Duration in minutes
    pub min_or_exact: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub measure: Option<String>,
    #[serde(default)]
    pub ingredient: IngredientDefinition,
    /// Label of the group the ingredient is listed under, e.g. "Für die Soße"
    #[serde(default)]
    pub group: Option<LocalizedText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uncountable_title: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Image {
    pub fn authenticated_url(&self, api_key: &str) -> String {
        format!("{}?kptnkey={}", self.url, api_key)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
