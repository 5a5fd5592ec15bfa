//! Small text helpers shared across the workspace

/// Turn arbitrary text into a URL-safe slug.
///
/// Alphanumeric characters are lowercased; every other run of characters
/// collapses to a single hyphen, with no leading or trailing hyphen.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            // Lowercasing can expand to several chars and may emit
            // combining marks; keep only the alphanumeric ones.
            for lower in c.to_lowercase() {
                if lower.is_alphanumeric() {
                    slug.push(lower);
                }
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Shorten text to at most `max_chars` characters, appending `...` when
/// anything was cut.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hilltop Residences"), "hilltop-residences");
        assert_eq!(slugify("Phase 2: Lakeside"), "phase-2-lakeside");
        assert_eq!(slugify("  already-slugged  "), "already-slugged");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("___"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_lowercases_unicode() {
        assert_eq!(slugify("Überbau Ost"), "überbau-ost");
    }

    #[test]
    fn test_excerpt_short_text_untouched() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("exactly ten", 11), "exactly ten");
    }

    #[test]
    fn test_excerpt_truncates_with_ellipsis() {
        assert_eq!(excerpt("a very long headline", 6), "a very...");
        assert_eq!(excerpt("abcdef", 3), "abc...");
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        assert_eq!(excerpt("ééééé", 5), "ééééé");
        assert_eq!(excerpt("éééééé", 5), "ééééé...");
    }

    proptest! {
        #[test]
        fn slug_uses_safe_charset(text in ".*") {
            let slug = slugify(&text);
            prop_assert!(
                slug.chars().all(|c| c == '-' || c.is_alphanumeric()),
                "unexpected character in '{slug}'"
            );
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
        }

        #[test]
        fn slugify_is_idempotent(text in "[a-zA-Z0-9 _]{0,40}") {
            let once = slugify(&text);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn excerpt_never_exceeds_limit_plus_ellipsis(
            text in ".{0,200}",
            max in 1usize..50,
        ) {
            let short = excerpt(&text, max);
            prop_assert!(short.chars().count() <= max + 3);
        }
    }
}
