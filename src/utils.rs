//! Utility functions for safe string operations
//!
//! Editors report cursor positions in characters or UTF-16 code units while
//! tree-sitter works in bytes. These helpers convert between them without
//! ever landing inside a multi-byte character.

/// Safely truncate a string at a UTF-8 char boundary.
///
/// # Examples
/// ```
/// use bem_suggest::utils::truncate_to_char_boundary;
///
/// assert_eq!(truncate_to_char_boundary("hello world", 5), "hello");
///
/// // '੨' spans bytes 3-5
/// let s = "abc੨def";
/// assert_eq!(truncate_to_char_boundary(s, 4), "abc");
/// assert_eq!(truncate_to_char_boundary(s, 6), "abc੨");
/// ```
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    &s[..floor_char_boundary(s, max_bytes)]
}

/// Safely truncate a string and append an ellipsis.
pub fn truncate_with_ellipsis(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        s.to_string()
    } else {
        format!("{}...", truncate_to_char_boundary(s, max_bytes))
    }
}

/// Largest char boundary at or before `byte`, clamped to the string length
pub fn floor_char_boundary(s: &str, byte: usize) -> usize {
    if byte >= s.len() {
        return s.len();
    }
    let mut end = byte;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Byte offset of the `chars`-th character. Offsets past the end map to the
/// string length.
pub fn char_to_byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Byte offset of a UTF-16 code unit offset, as reported by most editors.
///
/// An offset that falls between the two halves of a surrogate pair maps to
/// the start of that character.
///
/// # Arguments
/// * `s` - The document text
/// * `units` - Offset in UTF-16 code units from the start of `s`
///
/// # Returns
/// The matching UTF-8 byte offset, always on a char boundary. Offsets past
/// the end map to `s.len()`.
///
/// # Examples
/// ```
/// use bem_suggest::utils::utf16_to_byte_offset;
///
/// // '😀' is 4 bytes in UTF-8 and 2 code units in UTF-16
/// assert_eq!(utf16_to_byte_offset("😀a", 2), 4);
/// assert_eq!(utf16_to_byte_offset("😀a", 1), 0);
/// ```
pub fn utf16_to_byte_offset(s: &str, units: usize) -> usize {
    let mut seen = 0;
    for (byte, c) in s.char_indices() {
        let next = seen + c.len_utf16();
        if next > units {
            return byte;
        }
        seen = next;
    }
    s.len()
}
