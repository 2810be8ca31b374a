//! Free-text normalization.

/// Title-case a value.
///
/// A character is uppercased when the character before it is uncased and
/// lowercased otherwise, so `"tv show"` and `"TV SHOW"` both become
/// `"Tv Show"`. Only cased letters (those with an upper or lower case form)
/// count; digits, punctuation and ideographs start a new word.
///
/// # Examples
///
/// ```
/// use titles_transform::normalization::title_case;
///
/// assert_eq!(title_case("tv show"), "Tv Show");
/// assert_eq!(title_case("MOVIE"), "Movie");
/// assert_eq!(title_case("東京tokyo"), "東京Tokyo");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut after_cased = false;
    for ch in value.chars() {
        if after_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        after_cased = ch.is_lowercase() || ch.is_uppercase();
    }
    out
}

/// First entry of a comma-separated list, trimmed.
///
/// # Examples
///
/// ```
/// use titles_transform::normalization::primary_entry;
///
/// assert_eq!(primary_entry("United States, India"), "United States");
/// assert_eq!(primary_entry(" France "), "France");
/// ```
pub fn primary_entry(value: &str) -> &str {
    value
        .split_once(',')
        .map_or(value, |(first, _)| first)
        .trim()
}

/// Number of non-blank entries in a comma-separated list.
pub fn count_list_entries(value: &str) -> usize {
    value
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .count()
}
