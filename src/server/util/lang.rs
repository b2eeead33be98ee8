use serde_json::Value;

/// Fallback language when the requested code has no entry.
pub const LANG_CODE_DEFAULT: &str = "en";

/// Resolves a localized label from a translations map.
///
/// `translations` is a JSON object mapping language codes to display strings
/// (the shape stored in the reference tables). Resolution order: the
/// requested `code`, then [`LANG_CODE_DEFAULT`], then `""`. Absence of any
/// kind — missing map, wrong JSON shape, missing key, non-string value —
/// degrades to the next step rather than failing.
///
/// # Arguments
/// - `translations` - JSON translations map, if the row has one
/// - `code` - Requested language code, e.g. `"en"` or `"ru"`
///
/// # Returns
/// - The resolved label, or `""` when nothing matches
pub fn by_language_code(translations: Option<&Value>, code: &str) -> String {
    let Some(Value::Object(map)) = translations else {
        return String::new();
    };

    let lookup = |c: &str| {
        map.get(c)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let res = lookup(code);
    if res.is_empty() {
        lookup(LANG_CODE_DEFAULT)
    } else {
        res
    }
}
