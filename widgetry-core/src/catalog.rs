//! Static widget catalog: sections, items, and the compiled-in seed data.

use serde::{Deserialize, Serialize};

/// One catalog entry: a named widget with an icon glyph and a documentation URL.
///
/// The URL is stored and displayed but never fetched or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentItem {
    /// Display name, unique within its section
    pub name: String,
    /// Short glyph shown next to the name in list rows
    pub icon: String,
    /// Documentation link for the nearest terminal equivalent
    pub docs_url: String,
}

impl ComponentItem {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        docs_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            docs_url: docs_url.into(),
        }
    }
}

/// A named grouping of catalog items, rendered as a header with child rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSection {
    /// Section heading, unique across the catalog
    pub title: String,
    /// Items in display order
    pub items: Vec<ComponentItem>,
}

impl ComponentSection {
    pub fn new(title: impl Into<String>, items: Vec<ComponentItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

fn item(name: &str, icon: &str, docs_url: &str) -> ComponentItem {
    ComponentItem::new(name, icon, docs_url)
}

/// Build the compiled-in catalog: 28 items across 4 sections.
///
/// The data is trusted and correct by construction; [`crate::error::validate`]
/// exists as a data-quality guard, not a runtime error path.
pub fn seed_catalog() -> Vec<ComponentSection> {
    const RW: &str = "https://docs.rs/ratatui/latest/ratatui/widgets";
    const RT: &str = "https://docs.rs/ratatui/latest/ratatui/text";
    const RL: &str = "https://docs.rs/ratatui/latest/ratatui/layout";
    const TA: &str = "https://docs.rs/tui-textarea/latest/tui_textarea";

    vec![
        ComponentSection::new(
            "Text Input/Output",
            vec![
                item("Text", "📄", &format!("{RW}/struct.Paragraph.html")),
                item("Label", "🏷️", &format!("{RT}/struct.Span.html")),
                item("TextField", "📝", &format!("{TA}/struct.TextArea.html")),
                item(
                    "SecureField",
                    "🔒",
                    &format!("{TA}/struct.TextArea.html#method.set_mask_char"),
                ),
                item("TextArea", "📰", TA),
                item(
                    "Image",
                    "🖼️",
                    "https://docs.rs/ratatui-image/latest/ratatui_image/",
                ),
            ],
        ),
        ComponentSection::new(
            "Controls",
            vec![
                item("Button", "🔘", &format!("{RW}/index.html")),
                item("Menu", "📋", &format!("{RW}/struct.List.html")),
                item("Link", "🔗", &format!("{RT}/struct.Span.html")),
                item("Slider", "🎚️", &format!("{RW}/struct.Gauge.html")),
                item("Stepper", "➕", &format!("{RW}/struct.Paragraph.html")),
                item("Toggle", "🔀", &format!("{RW}/struct.Paragraph.html")),
                item("Picker", "🎛️", &format!("{RW}/struct.Tabs.html")),
                item("DatePicker", "📅", "https://docs.rs/chrono/latest/chrono/"),
                item(
                    "ColorPicker",
                    "🎨",
                    "https://docs.rs/ratatui/latest/ratatui/style/enum.Color.html",
                ),
                item("ProgressView", "⏳", &format!("{RW}/struct.Gauge.html")),
            ],
        ),
        ComponentSection::new(
            "Container Views",
            vec![
                item("HStack", "↔️", &format!("{RL}/struct.Layout.html")),
                item("VStack", "↕️", &format!("{RL}/struct.Layout.html")),
                item("ZStack", "🗂️", &format!("{RW}/struct.Clear.html")),
                item("Form", "📑", &format!("{RW}/struct.Table.html")),
                item("NavigationView", "🧭", &format!("{RW}/struct.Tabs.html")),
                item("Alerts", "⚠️", &format!("{RW}/struct.Clear.html")),
                item("Sheets", "📃", &format!("{RW}/struct.Clear.html")),
            ],
        ),
        ComponentSection::new(
            "List Types",
            vec![
                item("Plain List", "📜", &format!("{RW}/struct.List.html")),
                item("Inset List", "📥", &format!("{RW}/struct.List.html")),
                item("Grouped List", "🗃️", &format!("{RW}/struct.List.html")),
                item("Inset Grouped List", "🗄️", &format!("{RW}/struct.List.html")),
                item("Sidebar List", "📚", &format!("{RW}/struct.List.html")),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::validate;

    #[test]
    fn seed_has_expected_shape() {
        let sections = seed_catalog();
        assert_eq!(sections.len(), 4);

        let total: usize = sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, 28);

        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Text Input/Output", "Controls", "Container Views", "List Types"]
        );
    }

    #[test]
    fn seed_passes_data_quality_guard() {
        validate(&seed_catalog()).expect("seed catalog is correct by construction");
    }

    #[test]
    fn seed_serializes_to_json() {
        let json = serde_json::to_string(&seed_catalog()).unwrap();
        assert!(json.contains("\"Controls\""));
        assert!(json.contains("\"Toggle\""));

        let back: Vec<ComponentSection> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed_catalog());
    }
}
