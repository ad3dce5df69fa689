use tracing::trace;

/// Normalize an item name for catalog lookups.
///
/// Menu keys are stored in this form at load time, so every lookup has to go
/// through the same function.
pub fn normalize_item(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Keep at most `max` characters, marking a cut with `…`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

/// Title-case a name: the first letter of every alphabetic run is upper-cased
/// and the rest lower-cased, so `"coca-cola"` becomes `"Coca-Cola"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    trace!(?text, result = ?out, "Title-cased item name");
    out
}
