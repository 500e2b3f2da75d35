//! Plain text helpers shared by the Markdown renderer and the exporter.

use crate::model::Step;
use deunicode::deunicode;
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder in step text that stands for the next timer of the step
pub const TIMER_PLACEHOLDER: &str = "<timer>";

/// Longest file name most filesystems accept
pub const MAX_FILENAME_BYTES: usize = 255;

const FALLBACK_FILENAME: &str = "recipe";

const RESERVED_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn non_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]+").expect("valid regex"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Transliterates `text` to ASCII and joins words with underscores.
///
/// `"Käse Spätzle!"` becomes `"Kase_Spatzle_"`.
pub fn asciify(text: &str) -> String {
    let ascii = deunicode(text);
    let replaced = non_word_regex().replace_all(&ascii, "_");
    whitespace_regex().replace_all(&replaced, "_").into_owned()
}

/// Replaces `<timer>` placeholders with the step's timers, left to right.
///
/// Placeholders beyond the number of timers are kept verbatim. The step is
/// only read, so repeated calls give the same result.
pub fn substitute_timers(step: &Step, text: &str) -> String {
    let mut timers = step.timers().iter();
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(TIMER_PLACEHOLDER) {
        output.push_str(&rest[..pos]);
        match timers.next() {
            Some(timer) => output.push_str(&format!("{}m", timer.min_or_exact)),
            None => output.push_str(TIMER_PLACEHOLDER),
        }
        rest = &rest[pos + TIMER_PLACEHOLDER.len()..];
    }
    output.push_str(rest);
    output
}

/// Makes `text` usable as a single file name component of at most
/// `max_bytes` bytes.
///
/// Strips path separators, characters reserved on Windows and control
/// characters and trims trailing dots and spaces. Reserved device names get
/// an underscore after their stem (`CON.txt` becomes `CON_.txt`). Never
/// returns an empty string.
pub fn sanitize_filename(text: &str, max_bytes: usize) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_control() && !RESERVED_CHARS.contains(c))
        .collect();

    let mut name = clip(cleaned.trim(), max_bytes);
    if name.is_empty() {
        return FALLBACK_FILENAME.to_string();
    }

    let stem_len = name.find('.').unwrap_or(name.len());
    if RESERVED_NAMES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(&name[..stem_len]))
    {
        name.insert(stem_len, '_');
        name = clip(&name, max_bytes);
    }
    name
}

fn clip(text: &str, max_bytes: usize) -> String {
    truncate_bytes(text, max_bytes)
        .trim_end_matches(['.', ' '])
        .to_string()
}

fn truncate_bytes(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
