//! Demo recipes: the fixed rendering logic behind each catalog item.
//!
//! The original detail screen dispatched on the item name with one large
//! conditional. Here the dispatch is a tagged enum, each variant carrying
//! the parameters its renderer needs, so the recipe set is exhaustively
//! testable. Lookup happens once at selection time; an unrecognized name
//! resolves to `None` and the view degrades to a "component not found"
//! placeholder rather than an error.

use serde::Serialize;

/// Axis for the stack container demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StackAxis {
    Horizontal,
    Vertical,
    /// Overlapping layers (ZStack)
    Layered,
}

/// List presentation styles demoed by the "List Types" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListStyle {
    Plain,
    Inset,
    Grouped,
    InsetGrouped,
    Sidebar,
}

/// Rendering recipe for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DemoRecipe {
    Text {
        sample: &'static str,
    },
    Label {
        text: &'static str,
        glyph: &'static str,
    },
    TextField {
        placeholder: &'static str,
    },
    SecureField {
        placeholder: &'static str,
    },
    TextArea {
        initial: &'static str,
    },
    Image,
    Button {
        caption: &'static str,
    },
    Menu {
        title: &'static str,
        options: &'static [&'static str],
    },
    Link {
        label: &'static str,
        url: &'static str,
    },
    Slider {
        min: f64,
        max: f64,
        initial: f64,
    },
    Stepper {
        label: &'static str,
        initial: i64,
    },
    Toggle {
        label: &'static str,
        initial: bool,
    },
    Picker {
        label: &'static str,
        options: &'static [&'static str],
        initial: usize,
    },
    DatePicker,
    ColorPicker {
        palette: &'static [&'static str],
    },
    Progress {
        label: &'static str,
        total: f64,
    },
    Stack {
        axis: StackAxis,
    },
    Form,
    Navigation,
    Alert {
        title: &'static str,
        message: &'static str,
    },
    Sheet {
        message: &'static str,
    },
    ListDemo {
        style: ListStyle,
    },
}

impl DemoRecipe {
    /// Resolve an item name to its recipe. `None` means "component not
    /// found"; the caller renders a static placeholder.
    pub fn for_name(name: &str) -> Option<DemoRecipe> {
        let recipe = match name {
            "Text" => DemoRecipe::Text {
                sample: "Hello, world!",
            },
            "Label" => DemoRecipe::Label {
                text: "Welcome",
                glyph: "★",
            },
            "TextField" => DemoRecipe::TextField {
                placeholder: "Enter text here",
            },
            "SecureField" => DemoRecipe::SecureField {
                placeholder: "Password",
            },
            "TextArea" => DemoRecipe::TextArea {
                initial: "Editable text here...",
            },
            "Image" => DemoRecipe::Image,
            "Button" => DemoRecipe::Button { caption: "Click me" },
            "Menu" => DemoRecipe::Menu {
                title: "Options",
                options: &["Choice 1", "Choice 2"],
            },
            "Link" => DemoRecipe::Link {
                label: "Visit ratatui.rs",
                url: "https://ratatui.rs",
            },
            "Slider" => DemoRecipe::Slider {
                min: 0.0,
                max: 100.0,
                initial: 50.0,
            },
            "Stepper" => DemoRecipe::Stepper {
                label: "Quantity",
                initial: 1,
            },
            "Toggle" => DemoRecipe::Toggle {
                label: "Enable feature",
                initial: true,
            },
            "Picker" => DemoRecipe::Picker {
                label: "Select option",
                options: &["Option 1", "Option 2"],
                initial: 0,
            },
            "DatePicker" => DemoRecipe::DatePicker,
            "ColorPicker" => DemoRecipe::ColorPicker {
                palette: &["Blue", "Green", "Yellow", "Red", "Magenta", "Cyan"],
            },
            "ProgressView" => DemoRecipe::Progress {
                label: "Downloading...",
                total: 100.0,
            },
            "HStack" => DemoRecipe::Stack {
                axis: StackAxis::Horizontal,
            },
            "VStack" => DemoRecipe::Stack {
                axis: StackAxis::Vertical,
            },
            "ZStack" => DemoRecipe::Stack {
                axis: StackAxis::Layered,
            },
            "Form" => DemoRecipe::Form,
            "NavigationView" => DemoRecipe::Navigation,
            "Alerts" => DemoRecipe::Alert {
                title: "Heads up",
                message: "Something needs your attention.",
            },
            "Sheets" => DemoRecipe::Sheet {
                message: "A sheet slides up over the current screen.",
            },
            "Plain List" => DemoRecipe::ListDemo {
                style: ListStyle::Plain,
            },
            "Inset List" => DemoRecipe::ListDemo {
                style: ListStyle::Inset,
            },
            "Grouped List" => DemoRecipe::ListDemo {
                style: ListStyle::Grouped,
            },
            "Inset Grouped List" => DemoRecipe::ListDemo {
                style: ListStyle::InsetGrouped,
            },
            "Sidebar List" => DemoRecipe::ListDemo {
                style: ListStyle::Sidebar,
            },
            _ => return None,
        };
        Some(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    #[test]
    fn toggle_resolves_to_toggle_recipe() {
        assert_eq!(
            DemoRecipe::for_name("Toggle"),
            Some(DemoRecipe::Toggle {
                label: "Enable feature",
                initial: true,
            })
        );
    }

    #[test]
    fn picker_starts_on_first_option() {
        match DemoRecipe::for_name("Picker") {
            Some(DemoRecipe::Picker {
                options, initial, ..
            }) => {
                assert_eq!(initial, 0);
                assert_eq!(options[initial], "Option 1");
            }
            other => panic!("expected picker recipe, got {other:?}"),
        }
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert_eq!(DemoRecipe::for_name("Carousel"), None);
        assert_eq!(DemoRecipe::for_name(""), None);
        // Lookup is exact; the search filter is case-insensitive but the
        // recipe table is not.
        assert_eq!(DemoRecipe::for_name("toggle"), None);
    }

    #[test]
    fn every_seed_item_has_a_recipe() {
        for section in seed_catalog() {
            for item in section.items {
                assert!(
                    DemoRecipe::for_name(&item.name).is_some(),
                    "no recipe for seed item '{}'",
                    item.name
                );
            }
        }
    }

    #[test]
    fn list_styles_map_one_to_one() {
        let styles: Vec<ListStyle> = [
            "Plain List",
            "Inset List",
            "Grouped List",
            "Inset Grouped List",
            "Sidebar List",
        ]
        .iter()
        .map(|name| match DemoRecipe::for_name(name) {
            Some(DemoRecipe::ListDemo { style }) => style,
            other => panic!("expected list recipe for {name}, got {other:?}"),
        })
        .collect();

        assert_eq!(
            styles,
            [
                ListStyle::Plain,
                ListStyle::Inset,
                ListStyle::Grouped,
                ListStyle::InsetGrouped,
                ListStyle::Sidebar
            ]
        );
    }
}
