/// URL-safe slug derivation
///
/// Slugs are derived once, at creation time, from a human-readable field
/// (username for users, title for tasks) and never recomputed afterwards.

/// Derives a URL-safe slug from the input string.
///
/// Lowercases the input, keeps ASCII alphanumerics, and collapses every
/// other run of characters into a single dash. Leading and trailing
/// dashes are trimmed.
///
/// # Example
///
/// ```
/// use taskboard_shared::slug::slugify;
///
/// assert_eq!(slugify("john_doe"), "john-doe");
/// assert_eq!(slugify("Buy milk"), "buy-milk");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_was_dash = false;

    for ch in input.chars().flat_map(|c| c.to_lowercase()) {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscores_become_dashes() {
        assert_eq!(slugify("john_doe"), "john-doe");
    }

    #[test]
    fn test_spaces_become_dashes() {
        assert_eq!(slugify("Buy milk"), "buy-milk");
    }

    #[test]
    fn test_mixed_separators_collapse() {
        assert_eq!(slugify("Weekly -- status_report"), "weekly-status-report");
    }

    #[test]
    fn test_leading_trailing_punctuation_trimmed() {
        assert_eq!(slugify("  hello world!  "), "hello-world");
    }

    #[test]
    fn test_already_safe_input_unchanged() {
        assert_eq!(slugify("alice"), "alice");
    }
}
