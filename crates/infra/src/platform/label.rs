//! Phone-label normalization
//!
//! The store decorates system-defined multi-value labels with fixed
//! marker strings, e.g. `"_$!<Mobile>!$_"`, while user-defined custom
//! labels arrive bare. Normalization strips exactly one leading prefix
//! marker and exactly one trailing suffix marker if present, leaving the
//! human-readable label.
//!
//! Normalization is a pure transform over exactly these two literal
//! markers; no general bracket stripping, no locale-aware parsing. A
//! custom label that merely contains a similar substring passes through
//! untouched.

/// Leading marker on store-decorated standard labels.
const LABEL_PREFIX: &str = "_$!<";

/// Trailing marker on store-decorated standard labels.
const LABEL_SUFFIX: &str = ">!$_";

/// Strip the store's label markers from a raw multi-value label.
///
/// Strips at most one occurrence of each marker, one per side. Performs
/// no other normalization (no case folding, no whitespace trimming, no
/// locale translation).
pub fn normalize_label(raw: &str) -> String {
    let stripped = raw.strip_prefix(LABEL_PREFIX).unwrap_or(raw);
    let stripped = stripped.strip_suffix(LABEL_SUFFIX).unwrap_or(stripped);
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_label_markers_stripped() {
        assert_eq!(normalize_label("_$!<Mobile>!$_"), "Mobile");
        assert_eq!(normalize_label("_$!<Home>!$_"), "Home");
        assert_eq!(normalize_label("_$!<WorkFAX>!$_"), "WorkFAX");
    }

    #[test]
    fn test_custom_label_unchanged() {
        assert_eq!(normalize_label("Custom Label"), "Custom Label");
        assert_eq!(normalize_label("assistant"), "assistant");
    }

    #[test]
    fn test_one_sided_markers_strip_that_side_only() {
        assert_eq!(normalize_label("_$!<Mobile"), "Mobile");
        assert_eq!(normalize_label("Mobile>!$_"), "Mobile");
    }

    #[test]
    fn test_at_most_one_occurrence_per_side() {
        assert_eq!(normalize_label("_$!<_$!<Mobile>!$_>!$_"), "_$!<Mobile>!$_");
    }

    #[test]
    fn test_similar_substrings_inside_label_survive() {
        // Only exact leading/trailing markers are stripped
        assert_eq!(normalize_label("my_$!<label"), "my_$!<label");
        assert_eq!(normalize_label("label>!$_extra"), "label>!$_extra");
    }

    #[test]
    fn test_no_trimming_or_case_folding() {
        assert_eq!(normalize_label("  Mobile  "), "  Mobile  ");
        assert_eq!(normalize_label("_$!<mobile>!$_"), "mobile");
    }

    #[test]
    fn test_empty_and_marker_only_labels() {
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("_$!<>!$_"), "");
    }
}
