use crate::model::LocalizedText;
use std::collections::BTreeMap;

/// Picks the best available text from a locale map.
///
/// Locales in `preferred_order` are tried first, then any remaining locale in
/// sorted order. Empty strings count as missing.
pub fn best<'a, S: AsRef<str>>(
    mapping: &'a BTreeMap<String, String>,
    preferred_order: &[S],
) -> Option<&'a str> {
    preferred_order
        .iter()
        .filter_map(|locale| mapping.get(locale.as_ref()))
        .chain(mapping.values())
        .map(String::as_str)
        .find(|text| !text.is_empty())
}

/// Resolves [`LocalizedText`] values with a fixed locale preference
#[derive(Debug, Clone)]
pub struct Localizer {
    locales: Vec<String>,
}

impl Default for Localizer {
    fn default() -> Self {
        Localizer::new(default_locales())
    }
}

impl Localizer {
    pub fn new(locales: Vec<String>) -> Self {
        Localizer { locales }
    }

    pub fn text<'a>(&self, text: &'a LocalizedText) -> Option<&'a str> {
        best(text.as_map(), self.locales.as_slice())
    }
}

pub fn default_locales() -> Vec<String> {
    vec!["de".to_string(), "en".to_string()]
}
