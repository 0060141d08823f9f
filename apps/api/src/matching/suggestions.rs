//! Turns missing keywords and phrases into actionable prose tips.

/// Produces one suggestion line per missing item, preserving input order.
/// Callers wanting deterministic output pass an ordered collection.
pub fn generate_suggestions<I, S>(missing: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    missing
        .into_iter()
        .map(|item| {
            format!(
                "Consider adding experience or a project demonstrating '{}'.",
                item.as_ref()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_suggestion_per_item() {
        let suggestions = generate_suggestions(["rust", "machine learning"]);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(
            suggestions[0],
            "Consider adding experience or a project demonstrating 'rust'."
        );
        assert_eq!(
            suggestions[1],
            "Consider adding experience or a project demonstrating 'machine learning'."
        );
    }

    #[test]
    fn test_input_order_is_preserved() {
        let suggestions = generate_suggestions(["zebra", "alpha"]);
        assert!(suggestions[0].contains("zebra"));
        assert!(suggestions[1].contains("alpha"));
    }

    #[test]
    fn test_empty_input_yields_no_suggestions() {
        let suggestions = generate_suggestions(Vec::<String>::new());
        assert!(suggestions.is_empty());
    }
}
