//! Recipe identifiers taken from route segments.
//!
//! Recipe ids are often URLs themselves. When a detail route is split into
//! path segments and joined back, the `//` after the scheme collapses to a
//! single `/`. Only that prefix is repaired; the rest of the id is passed
//! through untouched.

/// Joins route segments with `/` and repairs a collapsed scheme prefix.
pub fn recipe_id_from_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join("/");
    normalize_recipe_id(&joined)
}

/// Repairs `https:/x` to `https://x` and `http:/x` to `http://x`.
pub fn normalize_recipe_id(id: &str) -> String {
    for scheme in ["https:", "http:"] {
        if let Some(rest) = id.strip_prefix(scheme) {
            if rest.starts_with('/') && !rest.starts_with("//") {
                return format!("{}/{}", scheme, rest);
            }
        }
    }
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_with_collapsed_scheme() {
        assert_eq!(
            recipe_id_from_segments(&["https:", "", "example.com", "a"]),
            "https://example.com/a"
        );
        assert_eq!(
            recipe_id_from_segments(&["http:", "example.com", "recepten", "sate"]),
            "http://example.com/recepten/sate"
        );
    }

    #[test]
    fn test_well_formed_id_is_unchanged() {
        assert_eq!(
            normalize_recipe_id("https://example.com/a"),
            "https://example.com/a"
        );
        assert_eq!(
            recipe_id_from_segments(&["https://example.com/a"]),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_plain_ids_pass_through() {
        assert_eq!(normalize_recipe_id("recipe-42"), "recipe-42");
        assert_eq!(recipe_id_from_segments(&["kb", "recipe", "42"]), "kb/recipe/42");
        // Inner empty segments are kept as they are.
        assert_eq!(recipe_id_from_segments(&["kb", "", "42"]), "kb//42");
    }

    #[test]
    fn test_only_the_prefix_is_repaired() {
        // A single slash deeper in the id is not a scheme artifact.
        assert_eq!(
            normalize_recipe_id("https:/example.com/a/https:/b"),
            "https://example.com/a/https:/b"
        );
        // Not a scheme at the start: leave alone.
        assert_eq!(normalize_recipe_id("urn:https:/x"), "urn:https:/x");
        // Triple slashes are not collapsed further.
        assert_eq!(normalize_recipe_id("https:///x"), "https:///x");
    }
}
