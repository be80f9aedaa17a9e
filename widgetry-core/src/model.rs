//! Catalog model: the fixed section list plus a live search query.
//!
//! The query is the only mutable state. The filtered view is a pure
//! function of `(sections, query)`, recomputed on read.

use std::ops::Range;

use tracing::debug;

use crate::catalog::{seed_catalog, ComponentSection};

/// Owns the static catalog and derives a filtered view from the query.
#[derive(Debug, Clone)]
pub struct CatalogModel {
    /// Fixed at construction, never mutated afterwards
    sections: Vec<ComponentSection>,
    /// Current free-text search string; empty means "no filter"
    query: String,
}

impl CatalogModel {
    /// Create a model over an explicit section list.
    pub fn new(sections: Vec<ComponentSection>) -> Self {
        Self {
            sections,
            query: String::new(),
        }
    }

    /// Create a model over the compiled-in seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// The full, unfiltered section list.
    pub fn sections(&self) -> &[ComponentSection] {
        &self.sections
    }

    /// The current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query verbatim. No trimming, no normalization; any
    /// string may follow any string.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        debug!(query = %self.query, "query updated");
    }

    /// Derive the filtered view.
    ///
    /// Empty query returns the sections unchanged. Otherwise each section
    /// keeps only the items whose name contains the query as a
    /// case-insensitive substring, in original order, and sections left
    /// empty are omitted. Pure and idempotent; zero matches is an empty
    /// result, not an error.
    pub fn filtered_sections(&self) -> Vec<ComponentSection> {
        if self.query.is_empty() {
            return self.sections.clone();
        }

        self.sections
            .iter()
            .filter_map(|section| {
                let items: Vec<_> = section
                    .items
                    .iter()
                    .filter(|item| match_range(&item.name, &self.query).is_some())
                    .cloned()
                    .collect();

                if items.is_empty() {
                    None
                } else {
                    Some(ComponentSection::new(section.title.clone(), items))
                }
            })
            .collect()
    }
}

impl Default for CatalogModel {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Find the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Returns the matched byte range of the original (un-lowercased) string,
/// which is what row highlighting needs. Comparison is Unicode-aware:
/// both sides are lowercased character by character.
pub fn match_range(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();

    // Each lowercased haystack char tagged with the byte offset of the
    // source char it came from (one source char can lowercase to several).
    let hay: Vec<(usize, char)> = haystack
        .char_indices()
        .flat_map(|(at, c)| c.to_lowercase().map(move |lc| (at, lc)))
        .collect();

    for start in 0..hay.len().saturating_sub(needle.len() - 1) {
        let window = &hay[start..start + needle.len()];
        if window.iter().map(|&(_, c)| c).eq(needle.iter().copied()) {
            let begin = window[0].0;
            let (last_at, _) = window[window.len() - 1];
            let last_len = haystack[last_at..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(0);
            return Some(begin..last_at + last_len);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ComponentItem, ComponentSection};
    use proptest::prelude::*;

    fn names(sections: &[ComponentSection]) -> Vec<&str> {
        sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.name.as_str()))
            .collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let model = CatalogModel::seeded();
        assert_eq!(model.filtered_sections(), model.sections());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut model = CatalogModel::seeded();
        model.set_query("toggle");
        let result = model.filtered_sections();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Controls");
        assert_eq!(names(&result), ["Toggle"]);
    }

    #[test]
    fn filter_spans_sections_and_preserves_order() {
        let mut model = CatalogModel::seeded();
        model.set_query("list");
        let result = model.filtered_sections();

        // "Plain List" etc. all live in "List Types"; no other seed name
        // contains "list".
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "List Types");
        assert_eq!(
            names(&result),
            [
                "Plain List",
                "Inset List",
                "Grouped List",
                "Inset Grouped List",
                "Sidebar List"
            ]
        );
    }

    #[test]
    fn filter_keeps_multiple_sections_in_catalog_order() {
        let mut model = CatalogModel::seeded();
        model.set_query("te");
        let result = model.filtered_sections();

        let titles: Vec<&str> = result.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Text Input/Output", "Controls"]);
        assert_eq!(
            names(&result),
            ["Text", "TextField", "TextArea", "Stepper", "DatePicker"]
        );
    }

    #[test]
    fn no_match_yields_empty_result_not_error() {
        let mut model = CatalogModel::seeded();
        model.set_query("zzz-no-match");
        assert!(model.filtered_sections().is_empty());
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut model = CatalogModel::new(vec![
            ComponentSection::new(
                "Keep",
                vec![ComponentItem::new("Button", "·", "https://example.invalid")],
            ),
            ComponentSection::new(
                "Drop",
                vec![ComponentItem::new("Slider", "·", "https://example.invalid")],
            ),
        ]);
        model.set_query("but");
        let result = model.filtered_sections();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Keep");
    }

    #[test]
    fn sections_with_zero_items_survive_empty_query() {
        let model = CatalogModel::new(vec![ComponentSection::new("Empty", vec![])]);
        assert_eq!(model.filtered_sections(), model.sections());
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let mut model = CatalogModel::seeded();
        model.set_query("pick");
        assert_eq!(model.filtered_sections(), model.filtered_sections());
        assert_eq!(model.query(), "pick");
    }

    #[test]
    fn set_query_is_verbatim() {
        let mut model = CatalogModel::seeded();
        model.set_query("  Button  ");
        assert_eq!(model.query(), "  Button  ");
        // Leading/trailing whitespace is part of the query, so nothing
        // in the seed matches.
        assert!(model.filtered_sections().is_empty());
    }

    #[test]
    fn match_range_finds_case_insensitive_substring() {
        assert_eq!(match_range("TextField", "field"), Some(4..9));
        assert_eq!(match_range("Toggle", "TOG"), Some(0..3));
        assert_eq!(match_range("Slider", "x"), None);
        assert_eq!(match_range("Button", ""), Some(0..0));
    }

    #[test]
    fn match_range_handles_multibyte_names() {
        assert_eq!(match_range("Ünïcode", "ünï"), Some(0..5));
        assert_eq!(match_range("naïve", "ÏV"), Some(2..5));
    }

    proptest! {
        // Appending characters to the query never grows the result set.
        #[test]
        fn refinement_narrows_results(base in "[a-zA-Z]{0,4}", suffix in "[a-zA-Z]{1,3}") {
            let mut model = CatalogModel::seeded();

            model.set_query(base.clone());
            let broad: Vec<String> = names(&model.filtered_sections())
                .into_iter()
                .map(String::from)
                .collect();

            model.set_query(format!("{base}{suffix}"));
            let narrow = model.filtered_sections();

            for name in names(&narrow) {
                prop_assert!(broad.iter().any(|b| b == name));
            }
        }

        // Every item in a filtered result actually contains the query,
        // and no result section is empty.
        #[test]
        fn results_contain_query(query in "[a-zA-Z ]{1,6}") {
            let mut model = CatalogModel::seeded();
            model.set_query(query.clone());

            for section in model.filtered_sections() {
                prop_assert!(!section.items.is_empty());
                for item in &section.items {
                    prop_assert!(match_range(&item.name, &query).is_some());
                }
            }
        }
    }
}
