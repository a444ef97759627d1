//! Incremental search over the option list.

/// Separator between alternative search terms.
pub const TERM_SEPARATOR: char = ',';

/// First option, in display order, containing any comma-separated term of
/// `search`.
///
/// Matching is case-sensitive substring containment. Empty terms are kept
/// and match every option, so an empty search selects the first option.
pub fn search_options<'a>(options: &'a [String], search: &str) -> Option<&'a str> {
    let terms: Vec<&str> = search.split(TERM_SEPARATOR).collect();

    options
        .iter()
        .find(|option| terms.iter().any(|term| option.contains(term)))
        .map(String::as_str)
}
