/// Characters rejected by common filesystems inside a single path segment.
pub const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*', '/', '\\'];

/// Make operator-supplied text safe to embed as one path segment.
///
/// Each illegal character is swapped for `_`, so the character count is preserved.
/// Spaces and non-ASCII text pass through untouched. `None` yields an empty string.
pub fn sanitize_filename_part(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    text.chars()
        .map(|ch| {
            if ILLEGAL_FILENAME_CHARS.contains(&ch) {
                '_'
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_illegal_character() {
        assert_eq!(sanitize_filename_part(Some("a<>:\"|?*/b")), "a________b");
        assert_eq!(sanitize_filename_part(Some("dir\\file")), "dir_file");
    }

    #[test]
    fn absent_text_becomes_empty() {
        assert_eq!(sanitize_filename_part(None), "");
        assert_eq!(sanitize_filename_part(Some("")), "");
    }

    #[test]
    fn keeps_spaces_and_non_ascii() {
        let input = "LOT 베큠 / 견적?";
        let cleaned = sanitize_filename_part(Some(input));
        assert_eq!(cleaned, "LOT 베큠 _ 견적_");
        assert_eq!(cleaned.chars().count(), input.chars().count());
    }

    #[test]
    fn sanitizing_twice_is_stable() {
        let once = sanitize_filename_part(Some("A:B*C<D>"));
        let twice = sanitize_filename_part(Some(once.as_str()));
        assert_eq!(once, twice);
        assert!(!once.contains(ILLEGAL_FILENAME_CHARS));
    }
}
