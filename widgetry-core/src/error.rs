/// Structured error types for widgetry-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (widgetry-tui) can still use `anyhow` for convenience.
use thiserror::Error;

use crate::catalog::ComponentSection;

/// Main error type for catalog data-quality checks
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// An item has an empty name
    #[error("Empty item name in section '{section}'")]
    EmptyItemName { section: String },

    /// Two sections share a title
    #[error("Duplicate section title '{title}'")]
    DuplicateSectionTitle { title: String },

    /// Two items in one section share a name
    #[error("Duplicate item name '{name}' in section '{section}'")]
    DuplicateItemName { section: String, name: String },
}

/// Result type alias for widgetry-core operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Check the catalog invariants: non-empty item names, unique section
/// titles, unique item names within each section.
///
/// The seed data is trusted at runtime; this is a guard for tests and
/// the `catalog` dump path, not a recoverable-error taxonomy.
pub fn validate(sections: &[ComponentSection]) -> Result<()> {
    let mut titles = std::collections::BTreeSet::new();
    for section in sections {
        if !titles.insert(section.title.as_str()) {
            return Err(CatalogError::DuplicateSectionTitle {
                title: section.title.clone(),
            });
        }

        let mut names = std::collections::BTreeSet::new();
        for item in &section.items {
            if item.name.is_empty() {
                return Err(CatalogError::EmptyItemName {
                    section: section.title.clone(),
                });
            }
            if !names.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateItemName {
                    section: section.title.clone(),
                    name: item.name.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ComponentItem, ComponentSection};

    fn section(title: &str, names: &[&str]) -> ComponentSection {
        ComponentSection::new(
            title,
            names
                .iter()
                .map(|n| ComponentItem::new(*n, "·", "https://example.invalid/docs"))
                .collect(),
        )
    }

    #[test]
    fn accepts_well_formed_catalog() {
        let sections = vec![section("A", &["One", "Two"]), section("B", &["One"])];
        assert_eq!(validate(&sections), Ok(()));
    }

    #[test]
    fn rejects_empty_item_name() {
        let sections = vec![section("A", &["One", ""])];
        assert_eq!(
            validate(&sections),
            Err(CatalogError::EmptyItemName {
                section: "A".to_string()
            })
        );
    }

    #[test]
    fn rejects_duplicate_section_title() {
        let sections = vec![section("A", &["One"]), section("A", &["Two"])];
        assert_eq!(
            validate(&sections),
            Err(CatalogError::DuplicateSectionTitle {
                title: "A".to_string()
            })
        );
    }

    #[test]
    fn rejects_duplicate_item_name_within_section() {
        let sections = vec![section("A", &["One", "One"])];
        let err = validate(&sections).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate item name 'One' in section 'A'"
        );
    }
}
