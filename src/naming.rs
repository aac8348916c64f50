//! Name normalization for block names derived from file names

use std::path::Path;

/// Convert an identifier or file stem to camelCase.
///
/// Word boundaries are whitespace, `-`, `_`, and a lowercase letter followed
/// by an uppercase one. The first word is lowercased; later words are
/// capitalized.
///
/// ```
/// use bem_suggest::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("UserProfileCard"), "userProfileCard");
/// assert_eq!(to_camel_case("nav-bar_item"), "navBarItem");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if prev_lower && c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = String::with_capacity(input.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.extend(word.chars().flat_map(char::to_lowercase));
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.extend(chars.flat_map(char::to_lowercase));
            }
        }
    }
    out
}

/// File name up to its first `.`: `./Card.module.scss` gives `Card`
pub fn file_stem(path: &str) -> &str {
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);
    name.split('.').next().unwrap_or(name)
}
