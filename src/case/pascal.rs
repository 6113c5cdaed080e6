/// Convert a `_`-separated identifier to PascalCase.
///
/// Each non-empty segment is capitalised and the segments are joined with no
/// separator. Empty segments, from doubled or edge underscores, vanish.
pub fn to_pascal_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for segment in text.split('_').filter(|s| !s.is_empty()) {
        result.push_str(&capitalize(segment));
    }
    result
}

/// Convert each item with [`to_pascal_case`], keeping order.
pub fn batch_to_pascal_case<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| to_pascal_case(item.as_ref()))
        .collect()
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
